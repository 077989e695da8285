pub const URL_PATH_INDEX: &str = "/";
pub const URL_PATH_STATIC: &str = "/static";
