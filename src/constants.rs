// Local store configuration
pub const DEFAULT_DATA_PATH: &str = "data";
pub const STORE_FILE_NAME: &str = "expenseflow.db";

// Keys inside the kv table; each holds one serialized collection
// (or the session token).
pub const KEY_USERS: &str = "users";
pub const KEY_EXPENSES: &str = "expenses";
pub const KEY_SESSION: &str = "session";

// Demo seed account
pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "password123";

// Validation field names surfaced in StoreError::Validation
pub const FIELD_USERNAME: &str = "username";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_USER_ID: &str = "user_id";
pub const FIELD_DATE: &str = "date";
