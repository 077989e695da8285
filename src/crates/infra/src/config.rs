use config::{Config, ConfigError, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::path::PathBuf;

/// 默认艺术家接口
const DEFAULT_ARTISTS_URL: &str = "https://groupietrackers.herokuapp.com/api/artists";
/// 默认关系接口
const DEFAULT_RELATIONS_URL: &str = "https://groupietrackers.herokuapp.com/api/relation";

/// 查找资源路径，优先级：当前工作目录 > 可执行文件目录
///
/// 绝对路径直接检查是否存在。
pub fn find_resource_path(path: &str) -> Option<PathBuf> {
    let relative = PathBuf::from(path);
    if relative.is_absolute() {
        return relative.exists().then_some(relative);
    }

    // 1. 优先从当前工作目录查找
    let cwd_path = std::env::current_dir().ok().map(|p| p.join(path));
    if let Some(ref path) = cwd_path {
        if path.exists() {
            return cwd_path;
        }
    }

    // 2. 从可执行文件目录查找
    let exe_path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .map(|p| p.join(path));
    if let Some(ref path) = exe_path {
        if path.exists() {
            return exe_path;
        }
    }

    None
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    /// 服务器配置
    server: RawServerConfig,
    /// 上游接口配置
    upstream: RawUpstreamConfig,
    /// 页面配置
    page: RawPageConfig,
}

/// 服务器配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawServerConfig {
    /// 监听地址
    host: String,
    /// 监听端口
    port: u16,
}

impl Default for RawServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// 上游接口配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawUpstreamConfig {
    artists_url: String,
    relations_url: String,
    /// 请求超时（秒），0 表示使用 HTTP 客户端默认值
    timeout_secs: u64,
    user_agent: String,
}

impl Default for RawUpstreamConfig {
    fn default() -> Self {
        Self {
            artists_url: DEFAULT_ARTISTS_URL.to_string(),
            relations_url: DEFAULT_RELATIONS_URL.to_string(),
            timeout_secs: 0,
            user_agent: format!("groupie/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// 页面配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawPageConfig {
    /// 页面布局文件，不存在时使用内置布局
    layout_path: String,
    /// 静态资源目录
    static_dir: String,
}

impl Default for RawPageConfig {
    fn default() -> Self {
        Self {
            layout_path: "resources/index.html".to_string(),
            static_dir: "resources/static".to_string(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

/// 上游接口配置
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub artists_url: String,
    pub relations_url: String,
    /// 请求超时（秒），0 表示不单独设置
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// 页面配置
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub layout_path: String,
    pub static_dir: String,
}

impl PageConfig {
    /// 布局文件实际路径
    pub fn layout_file(&self) -> Option<PathBuf> {
        find_resource_path(&self.layout_path)
    }

    /// 静态资源目录实际路径
    pub fn static_path(&self) -> Option<PathBuf> {
        find_resource_path(&self.static_dir).filter(|p| p.is_dir())
    }
}

/// 环境变量覆盖，形如 APP_SERVER__PORT=9000
fn environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

#[derive(Debug, Clone)]
pub struct AppConfigImpl {
    server: ServerConfig,
    upstream: UpstreamConfig,
    page: PageConfig,
}

impl AppConfigImpl {
    fn new(data: RawConfig) -> Self {
        let server_config = ServerConfig {
            host: data.server.host,
            port: data.server.port,
        };
        let upstream_config = UpstreamConfig {
            artists_url: data.upstream.artists_url,
            relations_url: data.upstream.relations_url,
            timeout_secs: data.upstream.timeout_secs,
            user_agent: data.upstream.user_agent,
        };
        let page_config = PageConfig {
            layout_path: data.page.layout_path,
            static_dir: data.page.static_dir,
        };
        AppConfigImpl {
            server: server_config,
            upstream: upstream_config,
            page: page_config,
        }
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone()
    }

    pub fn upstream(&self) -> UpstreamConfig {
        self.upstream.clone()
    }

    pub fn page(&self) -> PageConfig {
        self.page.clone()
    }

    /// 加载配置：.env -> config.toml（可选）-> APP_ 前缀环境变量
    pub fn load() -> Result<AppConfigImpl, ConfigError> {
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(environment())
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<AppConfigImpl, ConfigError> {
        let raw: RawConfig = config.try_deserialize()?; // serde 自动填充默认值
        Ok(AppConfigImpl::new(raw))
    }
}

impl Default for AppConfigImpl {
    fn default() -> Self {
        AppConfigImpl::new(RawConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(content: &str) -> AppConfigImpl {
        let config = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .unwrap();
        AppConfigImpl::from_config(config).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfigImpl::default();
        assert_eq!(cfg.server().host, "0.0.0.0");
        assert_eq!(cfg.server().port, 8080);
        assert_eq!(cfg.upstream().artists_url, DEFAULT_ARTISTS_URL);
        assert_eq!(cfg.upstream().relations_url, DEFAULT_RELATIONS_URL);
        assert_eq!(cfg.upstream().timeout_secs, 0);
        assert!(cfg.upstream().user_agent.starts_with("groupie/"));
        assert_eq!(cfg.page().layout_path, "resources/index.html");
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let cfg = from_toml("");
        assert_eq!(cfg.server().port, 8080);
        assert_eq!(cfg.page().static_dir, "resources/static");
    }

    #[test]
    fn test_partial_override() {
        let cfg = from_toml(
            r#"
            [server]
            port = 9000

            [upstream]
            artists_url = "http://localhost:3000/api/artists"
            timeout_secs = 5
            "#,
        );
        assert_eq!(cfg.server().port, 9000);
        assert_eq!(cfg.server().host, "0.0.0.0");
        assert_eq!(cfg.upstream().artists_url, "http://localhost:3000/api/artists");
        assert_eq!(cfg.upstream().relations_url, DEFAULT_RELATIONS_URL);
        assert_eq!(cfg.upstream().timeout_secs, 5);
    }

    #[test]
    fn test_environment_overrides_file() {
        let vars: config::Map<String, String> = [
            ("APP_SERVER__PORT", "9001"),
            ("APP_UPSTREAM__ARTISTS_URL", "http://localhost:3000/api/artists"),
            ("APP__SERVER__HOST", "127.0.0.9"),
            ("OTHER_SERVER__PORT", "1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::builder()
            .add_source(File::from_str("[server]\nport = 7000", FileFormat::Toml))
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap();
        let cfg = AppConfigImpl::from_config(config).unwrap();
        assert_eq!(cfg.server().port, 9001);
        assert_eq!(cfg.server().host, "0.0.0.0");
        assert_eq!(cfg.upstream().artists_url, "http://localhost:3000/api/artists");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let config = Config::builder()
            .add_source(File::from_str("[server]\nport = \"http\"", FileFormat::Toml))
            .build()
            .unwrap();
        assert!(AppConfigImpl::from_config(config).is_err());
    }

    #[test]
    fn test_find_resource_path_missing() {
        assert!(find_resource_path("definitely/not/here.html").is_none());
    }

    #[test]
    fn test_find_resource_path_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.html");
        std::fs::write(&file, "<html></html>").unwrap();
        assert_eq!(find_resource_path(file.to_str().unwrap()), Some(file.clone()));
    }
}
