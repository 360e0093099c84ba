//! Placeholder values shared by fixtures.

/// bcrypt cost used for fixture passwords; the minimum bcrypt accepts keeps tests fast.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Category tag given to fixture products.
pub static TEST_PRODUCT_CATEGORY: &str = "BLACK_TEA";

/// Size format tag given to fixture products.
pub static TEST_PRODUCT_SIZE_FORMAT: &str = "LOOSE_LEAF";

/// Category tag given to fixture raw materials.
pub static TEST_MATERIAL_CATEGORY: &str = "PACKAGING";

/// Unit tag given to fixture raw materials.
pub static TEST_MATERIAL_UNIT: &str = "PIECE";
