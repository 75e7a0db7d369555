//! Format markers and decoder limits.

// ============================================================================
// Markers
// ============================================================================

/// Starts an integer: `i<number>e`
pub const INTEGER_START: u8 = b'i';

/// Starts a list: `l<items>e`
pub const LIST_START: u8 = b'l';

/// Starts a dictionary: `d<key><value>...e`
pub const DICT_START: u8 = b'd';

/// Closes an integer, list or dictionary
pub const END: u8 = b'e';

/// Separates a byte string's length prefix from its payload
pub const STRING_SEPARATOR: u8 = b':';

// ============================================================================
// Limits
// ============================================================================

/// Default maximum nesting depth of lists and dictionaries
pub const MAX_DEPTH: usize = 64;
