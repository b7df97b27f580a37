//! 服务端 id 生成

use uuid::Uuid;

/// Time-ordered, hyphenated UUID (version 7), always 36 characters.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
