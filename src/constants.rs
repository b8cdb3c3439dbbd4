/// Number of questions returned per page by the listing endpoints
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Category reported as `current_category` by the unscoped question listing
pub const DEFAULT_CATEGORY_ID: i64 = 1;

// =============================================================================
// Error Messages
// =============================================================================

pub const MSG_BAD_REQUEST: &str = "Bad request";

pub const MSG_NOT_FOUND: &str = "Resource Not Found";

pub const MSG_METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

pub const MSG_UNPROCESSABLE: &str = "Unprocessable entity";

pub const MSG_SERVER_ERROR: &str = "Server error";
