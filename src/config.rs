//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::format::{format_number_with_precision, DEFAULT_PRECISION};
use crate::validation::{
    PasswordPolicy, UsernamePolicy, DEFAULT_PASSWORD_MIN_LENGTH, DEFAULT_USERNAME_MAX_LENGTH,
    DEFAULT_USERNAME_MIN_LENGTH,
};

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV_VAR: &str = "NOMAD_KIT_CONFIG";

/// nomad-kit 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NomadConfig {
    /// `format_number` 소수 자릿수
    #[serde(default = "default_number_precision")]
    pub number_precision: usize,
    /// 비밀번호 최소 길이
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
    /// 사용자명 최소 길이
    #[serde(default = "default_username_min_length")]
    pub username_min_length: usize,
    /// 사용자명 최대 길이
    #[serde(default = "default_username_max_length")]
    pub username_max_length: usize,
}

fn default_number_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_password_min_length() -> usize {
    DEFAULT_PASSWORD_MIN_LENGTH
}

fn default_username_min_length() -> usize {
    DEFAULT_USERNAME_MIN_LENGTH
}

fn default_username_max_length() -> usize {
    DEFAULT_USERNAME_MAX_LENGTH
}

impl Default for NomadConfig {
    fn default() -> Self {
        Self {
            number_precision: default_number_precision(),
            password_min_length: default_password_min_length(),
            username_min_length: default_username_min_length(),
            username_max_length: default_username_max_length(),
        }
    }
}

impl NomadConfig {
    /// 설정된 비밀번호 정책
    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy::from_config(self)
    }

    /// 설정된 사용자명 정책
    pub fn username_policy(&self) -> UsernamePolicy {
        UsernamePolicy::from_config(self)
    }

    /// 설정된 자릿수로 `format_number`
    pub fn format_number(&self, num: impl Into<Option<f64>>) -> String {
        format_number_with_precision(num, self.number_precision)
    }
}

/// 설정 파일 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱 실패
    Parse(serde_json::Error),
    /// JSON 직렬화 실패
    Serialize(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(e) => write!(f, "설정 파일 파싱 오류: {}", e),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) | ConfigError::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// 설정 파일 경로
///
/// `$NOMAD_KIT_CONFIG`가 있으면 그 경로, 없으면 ~/.config/nomad-kit/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("nomad-kit").join("config.json")
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> NomadConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => {
            log::debug!("설정 로드: {}", path.display());
            config
        }
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            NomadConfig::default()
        }
        Err(e) => {
            log::warn!("설정 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
            NomadConfig::default()
        }
    }
}

/// 지정한 파일에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<NomadConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(ConfigError::Parse)
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &NomadConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

/// 지정한 파일에 설정 저장 (상위 디렉토리 자동 생성)
pub fn save_config_to(config: &NomadConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    fs::write(path, json)?;
    Ok(())
}
