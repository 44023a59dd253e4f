//! File naming inside the asset store

/// File name of an item's untinted sprite
pub const ORIGINAL_FILE_NAME: &str = "original.png";

/// Directory holding ingredient icons, next to the slot directories
pub const INGREDIENTS_DIR: &str = "ingredients";

/// Keep only alphanumeric characters.
///
/// `"Prismatic Shard"` becomes `"PrismaticShard"`; names that differ only in
/// punctuation or spacing map to the same directory.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.chars().filter(|c| c.is_alphanumeric()).collect()
}
