pub const DEFAULT_PREVIEW_SIZE: usize = 8;
pub const DEFAULT_TOP_SIZE: usize = 4;
