//! Entry point table.
//!
//! Required rows are core OpenGL 3.3 / ES 3.0 entry points every supported
//! context exposes; a missing one fails the bind. Optional rows are newer or
//! extension entry points that callers probe with `has_*` before use.

use std::ffi::c_void;

use crate::types::{
    GLDEBUGPROC, GLbitfield, GLboolean, GLchar, GLclampf, GLenum, GLfloat, GLint, GLintptr,
    GLsizei, GLsizeiptr, GLubyte, GLuint,
};

gl_api! {
    required {
        // ─── State ───────────────────────────────────────────────────────
        fn get_error = GetError() -> GLenum;
        fn get_string = GetString(name: GLenum) -> *const GLubyte;
        fn get_integerv = GetIntegerv(pname: GLenum, data: *mut GLint);
        fn enable = Enable(cap: GLenum);
        fn disable = Disable(cap: GLenum);
        fn is_enabled = IsEnabled(cap: GLenum) -> GLboolean;
        fn viewport = Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn scissor = Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn clear_color = ClearColor(red: GLclampf, green: GLclampf, blue: GLclampf, alpha: GLclampf);
        fn clear = Clear(mask: GLbitfield);
        fn cull_face = CullFace(mode: GLenum);
        fn front_face = FrontFace(mode: GLenum);
        fn depth_func = DepthFunc(func: GLenum);
        fn depth_mask = DepthMask(flag: GLboolean);
        fn blend_func = BlendFunc(sfactor: GLenum, dfactor: GLenum);
        fn flush = Flush();
        fn finish = Finish();

        // ─── Buffers ─────────────────────────────────────────────────────
        fn gen_buffers = GenBuffers(n: GLsizei, buffers: *mut GLuint);
        fn delete_buffers = DeleteBuffers(n: GLsizei, buffers: *const GLuint);
        fn bind_buffer = BindBuffer(target: GLenum, buffer: GLuint);
        fn buffer_data = BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
        fn buffer_sub_data = BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
        fn bind_buffer_base = BindBufferBase(target: GLenum, index: GLuint, buffer: GLuint);

        // ─── Vertex arrays ───────────────────────────────────────────────
        fn gen_vertex_arrays = GenVertexArrays(n: GLsizei, arrays: *mut GLuint),
            or ["glGenVertexArraysAPPLE", "glGenVertexArraysOES"];
        fn delete_vertex_arrays = DeleteVertexArrays(n: GLsizei, arrays: *const GLuint),
            or ["glDeleteVertexArraysAPPLE", "glDeleteVertexArraysOES"];
        fn bind_vertex_array = BindVertexArray(array: GLuint),
            or ["glBindVertexArrayAPPLE", "glBindVertexArrayOES"];
        fn enable_vertex_attrib_array = EnableVertexAttribArray(index: GLuint);
        fn disable_vertex_attrib_array = DisableVertexAttribArray(index: GLuint);
        fn vertex_attrib_pointer = VertexAttribPointer(
            index: GLuint,
            size: GLint,
            ty: GLenum,
            normalized: GLboolean,
            stride: GLsizei,
            pointer: *const c_void,
        );

        // ─── Drawing ─────────────────────────────────────────────────────
        fn draw_arrays = DrawArrays(mode: GLenum, first: GLint, count: GLsizei);
        fn draw_elements = DrawElements(mode: GLenum, count: GLsizei, ty: GLenum, indices: *const c_void);
        fn draw_arrays_instanced = DrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instance_count: GLsizei);

        // ─── Shaders & programs ──────────────────────────────────────────
        fn create_shader = CreateShader(ty: GLenum) -> GLuint;
        fn delete_shader = DeleteShader(shader: GLuint);
        fn shader_source = ShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint);
        fn compile_shader = CompileShader(shader: GLuint);
        fn get_shaderiv = GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
        fn get_shader_info_log = GetShaderInfoLog(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
        fn create_program = CreateProgram() -> GLuint;
        fn delete_program = DeleteProgram(program: GLuint);
        fn attach_shader = AttachShader(program: GLuint, shader: GLuint);
        fn link_program = LinkProgram(program: GLuint);
        fn get_programiv = GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
        fn get_program_info_log = GetProgramInfoLog(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
        fn use_program = UseProgram(program: GLuint);
        fn get_uniform_location = GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn uniform1i = Uniform1i(location: GLint, v0: GLint);
        fn uniform1f = Uniform1f(location: GLint, v0: GLfloat);
        fn uniform4f = Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
        fn uniform_matrix4fv = UniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);

        // ─── Textures ────────────────────────────────────────────────────
        fn gen_textures = GenTextures(n: GLsizei, textures: *mut GLuint);
        fn delete_textures = DeleteTextures(n: GLsizei, textures: *const GLuint);
        fn active_texture = ActiveTexture(texture: GLenum);
        fn bind_texture = BindTexture(target: GLenum, texture: GLuint);
        fn tex_parameteri = TexParameteri(target: GLenum, pname: GLenum, param: GLint);
        fn tex_image_2d = TexImage2D(
            target: GLenum,
            level: GLint,
            internal_format: GLint,
            width: GLsizei,
            height: GLsizei,
            border: GLint,
            format: GLenum,
            ty: GLenum,
            pixels: *const c_void,
        );
        fn generate_mipmap = GenerateMipmap(target: GLenum);

        // ─── Framebuffers ────────────────────────────────────────────────
        fn gen_framebuffers = GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint),
            or ["glGenFramebuffersEXT"];
        fn delete_framebuffers = DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint),
            or ["glDeleteFramebuffersEXT"];
        fn bind_framebuffer = BindFramebuffer(target: GLenum, framebuffer: GLuint),
            or ["glBindFramebufferEXT"];
        fn framebuffer_texture_2d = FramebufferTexture2D(
            target: GLenum,
            attachment: GLenum,
            textarget: GLenum,
            texture: GLuint,
            level: GLint,
        ), or ["glFramebufferTexture2DEXT"];
        fn check_framebuffer_status = CheckFramebufferStatus(target: GLenum) -> GLenum,
            or ["glCheckFramebufferStatusEXT"];
    }
    optional {
        // ─── KHR_debug (core 4.3) ────────────────────────────────────────
        fn debug_message_callback = DebugMessageCallback(callback: GLDEBUGPROC, user_param: *const c_void),
            or ["glDebugMessageCallbackKHR", "glDebugMessageCallbackARB"];
        fn object_label = ObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar),
            or ["glObjectLabelKHR"];
        fn push_debug_group = PushDebugGroup(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar),
            or ["glPushDebugGroupKHR"];
        fn pop_debug_group = PopDebugGroup(),
            or ["glPopDebugGroupKHR"];

        // ─── ARB_buffer_storage / ARB_texture_storage ────────────────────
        fn buffer_storage = BufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield),
            or ["glBufferStorageEXT"];
        fn tex_storage_2d = TexStorage2D(
            target: GLenum,
            levels: GLsizei,
            internal_format: GLenum,
            width: GLsizei,
            height: GLsizei,
        ), or ["glTexStorage2DEXT"];

        // ─── Base-vertex draws (core 3.2, ES 3.2) ────────────────────────
        fn draw_elements_base_vertex = DrawElementsBaseVertex(
            mode: GLenum,
            count: GLsizei,
            ty: GLenum,
            indices: *const c_void,
            base_vertex: GLint,
        ), or ["glDrawElementsBaseVertexOES", "glDrawElementsBaseVertexEXT"];
    }
}
