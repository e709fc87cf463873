//! Named GL constants.
//!
//! A working subset of the registry enums, grouped the way the registry
//! groups them. Values are fixed by the Khronos registry.

use crate::types::{GLbitfield, GLboolean, GLenum, GLuint};

// ─── Boolean / misc ───────────────────────────────────────────────────────────

pub const FALSE: GLboolean = 0;
pub const TRUE: GLboolean = 1;
pub const NONE: GLenum = 0;
pub const ZERO: GLenum = 0;
pub const ONE: GLenum = 1;
pub const INVALID_INDEX: GLuint = 0xFFFF_FFFF;

// ─── Errors ───────────────────────────────────────────────────────────────────

pub const NO_ERROR: GLenum = 0;
pub const INVALID_ENUM: GLenum = 0x0500;
pub const INVALID_VALUE: GLenum = 0x0501;
pub const INVALID_OPERATION: GLenum = 0x0502;
pub const STACK_OVERFLOW: GLenum = 0x0503;
pub const STACK_UNDERFLOW: GLenum = 0x0504;
pub const OUT_OF_MEMORY: GLenum = 0x0505;
pub const INVALID_FRAMEBUFFER_OPERATION: GLenum = 0x0506;

// ─── Clear masks ──────────────────────────────────────────────────────────────

pub const DEPTH_BUFFER_BIT: GLbitfield = 0x0000_0100;
pub const STENCIL_BUFFER_BIT: GLbitfield = 0x0000_0400;
pub const COLOR_BUFFER_BIT: GLbitfield = 0x0000_4000;

// ─── Primitives ───────────────────────────────────────────────────────────────

pub const POINTS: GLenum = 0x0000;
pub const LINES: GLenum = 0x0001;
pub const LINE_LOOP: GLenum = 0x0002;
pub const LINE_STRIP: GLenum = 0x0003;
pub const TRIANGLES: GLenum = 0x0004;
pub const TRIANGLE_STRIP: GLenum = 0x0005;
pub const TRIANGLE_FAN: GLenum = 0x0006;

// ─── Capabilities ─────────────────────────────────────────────────────────────

pub const CULL_FACE: GLenum = 0x0B44;
pub const DEPTH_TEST: GLenum = 0x0B71;
pub const STENCIL_TEST: GLenum = 0x0B90;
pub const BLEND: GLenum = 0x0BE2;
pub const SCISSOR_TEST: GLenum = 0x0C11;
pub const FRAMEBUFFER_SRGB: GLenum = 0x8DB9;
pub const DEBUG_OUTPUT: GLenum = 0x92E0;
pub const DEBUG_OUTPUT_SYNCHRONOUS: GLenum = 0x8242;

// ─── Faces / comparison ───────────────────────────────────────────────────────

pub const FRONT: GLenum = 0x0404;
pub const BACK: GLenum = 0x0405;
pub const FRONT_AND_BACK: GLenum = 0x0408;
pub const CW: GLenum = 0x0900;
pub const CCW: GLenum = 0x0901;

pub const NEVER: GLenum = 0x0200;
pub const LESS: GLenum = 0x0201;
pub const EQUAL: GLenum = 0x0202;
pub const LEQUAL: GLenum = 0x0203;
pub const GREATER: GLenum = 0x0204;
pub const NOTEQUAL: GLenum = 0x0205;
pub const GEQUAL: GLenum = 0x0206;
pub const ALWAYS: GLenum = 0x0207;

// ─── Blending ─────────────────────────────────────────────────────────────────

pub const SRC_COLOR: GLenum = 0x0300;
pub const ONE_MINUS_SRC_COLOR: GLenum = 0x0301;
pub const SRC_ALPHA: GLenum = 0x0302;
pub const ONE_MINUS_SRC_ALPHA: GLenum = 0x0303;
pub const DST_ALPHA: GLenum = 0x0304;
pub const ONE_MINUS_DST_ALPHA: GLenum = 0x0305;

// ─── Data types ───────────────────────────────────────────────────────────────

pub const BYTE: GLenum = 0x1400;
pub const UNSIGNED_BYTE: GLenum = 0x1401;
pub const SHORT: GLenum = 0x1402;
pub const UNSIGNED_SHORT: GLenum = 0x1403;
pub const INT: GLenum = 0x1404;
pub const UNSIGNED_INT: GLenum = 0x1405;
pub const FLOAT: GLenum = 0x1406;
pub const HALF_FLOAT: GLenum = 0x140B;

// ─── Strings / queries ────────────────────────────────────────────────────────

pub const VENDOR: GLenum = 0x1F00;
pub const RENDERER: GLenum = 0x1F01;
pub const VERSION: GLenum = 0x1F02;
pub const EXTENSIONS: GLenum = 0x1F03;
pub const SHADING_LANGUAGE_VERSION: GLenum = 0x8B8C;
pub const MAJOR_VERSION: GLenum = 0x821B;
pub const MINOR_VERSION: GLenum = 0x821C;
pub const NUM_EXTENSIONS: GLenum = 0x821D;
pub const VIEWPORT: GLenum = 0x0BA2;
pub const MAX_TEXTURE_SIZE: GLenum = 0x0D33;

// ─── Buffers ──────────────────────────────────────────────────────────────────

pub const ARRAY_BUFFER: GLenum = 0x8892;
pub const ELEMENT_ARRAY_BUFFER: GLenum = 0x8893;
pub const UNIFORM_BUFFER: GLenum = 0x8A11;
pub const STREAM_DRAW: GLenum = 0x88E0;
pub const STATIC_DRAW: GLenum = 0x88E4;
pub const DYNAMIC_DRAW: GLenum = 0x88E8;
pub const MAP_WRITE_BIT: GLbitfield = 0x0002;
pub const DYNAMIC_STORAGE_BIT: GLbitfield = 0x0100;

// ─── Shaders / programs ───────────────────────────────────────────────────────

pub const FRAGMENT_SHADER: GLenum = 0x8B30;
pub const VERTEX_SHADER: GLenum = 0x8B31;
pub const COMPILE_STATUS: GLenum = 0x8B81;
pub const LINK_STATUS: GLenum = 0x8B82;
pub const INFO_LOG_LENGTH: GLenum = 0x8B84;

// ─── Textures ─────────────────────────────────────────────────────────────────

pub const TEXTURE_2D: GLenum = 0x0DE1;
pub const TEXTURE0: GLenum = 0x84C0;
pub const TEXTURE_MAG_FILTER: GLenum = 0x2800;
pub const TEXTURE_MIN_FILTER: GLenum = 0x2801;
pub const TEXTURE_WRAP_S: GLenum = 0x2802;
pub const TEXTURE_WRAP_T: GLenum = 0x2803;
pub const NEAREST: GLenum = 0x2600;
pub const LINEAR: GLenum = 0x2601;
pub const LINEAR_MIPMAP_LINEAR: GLenum = 0x2703;
pub const REPEAT: GLenum = 0x2901;
pub const CLAMP_TO_EDGE: GLenum = 0x812F;
pub const RGB: GLenum = 0x1907;
pub const RGBA: GLenum = 0x1908;
pub const RGBA8: GLenum = 0x8058;
pub const SRGB8_ALPHA8: GLenum = 0x8C43;
pub const DEPTH24_STENCIL8: GLenum = 0x88F0;

// ─── Framebuffers ─────────────────────────────────────────────────────────────

pub const FRAMEBUFFER: GLenum = 0x8D40;
pub const RENDERBUFFER: GLenum = 0x8D41;
pub const COLOR_ATTACHMENT0: GLenum = 0x8CE0;
pub const DEPTH_STENCIL_ATTACHMENT: GLenum = 0x821A;
pub const FRAMEBUFFER_COMPLETE: GLenum = 0x8CD5;

// ─── Debug output ─────────────────────────────────────────────────────────────

pub const DEBUG_SEVERITY_HIGH: GLenum = 0x9146;
pub const DEBUG_SEVERITY_MEDIUM: GLenum = 0x9147;
pub const DEBUG_SEVERITY_LOW: GLenum = 0x9148;
pub const DEBUG_SEVERITY_NOTIFICATION: GLenum = 0x826B;
pub const BUFFER: GLenum = 0x82E0;
pub const SHADER: GLenum = 0x82E1;
pub const PROGRAM: GLenum = 0x82E2;
