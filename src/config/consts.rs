// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://api.worldaquatics.com";
pub const RESULTS_PATH: &str = "/fina/athletes/{id}/results";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const ACCEPT: &str = "application/json";
pub const REFERER: &str = "https://www.worldaquatics.com/";
pub const TIMEOUT_SECS: u64 = 30;

// Subject
pub const DEFAULT_SUBJECT_ID: &str = "1017653";
pub const UNKNOWN_SUBJECT: &str = "Unknown";

// Export
pub const NAME_PLACEHOLDER: &str = "{name}";
pub const ARCHIVE_TEMPLATE: &str = "{name}_原始数据.json";
pub const XLSX_TEMPLATE: &str = "{name}_比赛记录.xlsx";
pub const CSV_TEMPLATE: &str = "{name}比赛成绩数据.csv";
pub const DEFAULT_ARCHIVE: &str = "SUN Yang_原始数据.json";

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
