/// Default base URL of the Spoonacular recipes API
pub const DEFAULT_SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com/recipes";

/// Project URL used by unconfigured deployments; treated as demo mode
pub const PLACEHOLDER_SUPABASE_URL: &str = "https://placeholder.supabase.co";

/// Number of results requested from the recipe API when the caller gives none
pub const DEFAULT_RESULT_COUNT: u32 = 12;

/// Upper bound on concurrent detail lookups per ingredient search
pub const MAX_DETAIL_LOOKUPS: usize = 6;

/// Description length (in characters) kept from the recipe summary
pub const DESCRIPTION_MAX_CHARS: usize = 150;

/// Instruction steps of this length or shorter are discarded as noise
pub const MIN_INSTRUCTION_STEP_CHARS: usize = 10;

// =============================================================================
// Difficulty thresholds
// =============================================================================

/// Cook time (minutes) above which a recipe is Hard
pub const HARD_COOK_TIME_MINUTES: u32 = 45;

/// Ingredient count above which a recipe is Hard
pub const HARD_INGREDIENT_COUNT: usize = 10;

/// Cook time (minutes) above which a recipe is at least Medium
pub const MEDIUM_COOK_TIME_MINUTES: u32 = 25;

/// Ingredient count above which a recipe is at least Medium
pub const MEDIUM_INGREDIENT_COUNT: usize = 6;

/// OAuth flows older than this are discarded (10 minutes)
pub const OAUTH_FLOW_TTL_SECS: i64 = 600;

/// Capacity of the auth event broadcast channel
pub const AUTH_EVENT_CAPACITY: usize = 64;

// =============================================================================
// Error Messages
// =============================================================================

pub const ERR_SEARCH_PARAMS_REQUIRED: &str = "Either ingredients or query parameter is required";

pub const ERR_SEARCH_BODY_REQUIRED: &str = "Either ingredients or query is required";

pub const ERR_AUTH_NOT_CONFIGURED: &str = "Authentication not configured. Running in demo mode.";

pub const ERR_AUTH_UNAVAILABLE: &str = "Authentication service unavailable";

pub const ERR_INGREDIENT_NAME_REQUIRED: &str = "Ingredient name must not be empty";
