//! Configuration for the frontend application

use article_admin_shared::{config::AppConfig, dashboard::DashboardConfig};

// API base URL - 编译时从环境变量读取，默认本地开发地址
pub const API_BASE: Option<&str> = option_env!("ARTICLE_ADMIN_API_BASE");

/// Host photo paths are resolved against
pub const MEDIA_HOST: Option<&str> = option_env!("ARTICLE_ADMIN_MEDIA_HOST");

/// Dashboard preset: `minimal`, `cards` or `full` (default)
pub const LAYOUT: Option<&str> = option_env!("ARTICLE_ADMIN_LAYOUT");

pub fn app_config() -> AppConfig {
    AppConfig::from_overrides(API_BASE, MEDIA_HOST)
}

pub fn dashboard_config() -> DashboardConfig {
    LAYOUT
        .and_then(DashboardConfig::preset)
        .unwrap_or_default()
}
