//! Build-configuration schema
//!
//! The validated types the loader produces. A [`BuildConfiguration`] is
//! constructed once per build invocation and is immutable afterwards; the
//! host build tool consumes it to drive compilation, packaging, and signing.

use crate::config::document::{
    AndroidSection, BuildTypeSection, CompileOptionsSection, DefaultConfigSection, Document,
    KotlinOptionsSection,
};
use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// Android application plugin id
pub const ANDROID_APPLICATION_PLUGIN: &str = "com.android.application";

/// Kotlin Android plugin id
pub const KOTLIN_ANDROID_PLUGIN: &str = "org.jetbrains.kotlin.android";

/// Flutter Gradle plugin id. Must be applied after the Android and Kotlin
/// plugins.
pub const FLUTTER_GRADLE_PLUGIN: &str = "dev.flutter.flutter-gradle-plugin";

/// Reverse-domain identifier: at least two dot-separated segments, each
/// starting with a letter.
pub(crate) static PACKAGE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$").unwrap());

/// Semantic-version-like string. Android version names are commonly two
/// segments (`1.0`), so this is looser than strict semver.
pub(crate) static VERSION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)*([-+][0-9A-Za-z.-]+)?$").unwrap());

/// Dotted numeric NDK version (`26.1.10909125`)
pub(crate) static NDK_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)*$").unwrap());

/// Java language level for source/target compatibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JavaVersion {
    /// Java 8 (`1.8`)
    V1_8,
    /// Java 11
    V11,
    /// Java 17
    V17,
    /// Java 21
    V21,
}

impl JavaVersion {
    /// All accepted spellings, in order
    pub const NAMES: &'static [&'static str] = &["1.8", "11", "17", "21"];

    /// Parse a language level from its document spelling
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "1.8" => Some(Self::V1_8),
            "11" => Some(Self::V11),
            "17" => Some(Self::V17),
            "21" => Some(Self::V21),
            _ => None,
        }
    }

    /// The document spelling of this level
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1_8 => "1.8",
            Self::V11 => "11",
            Self::V17 => "17",
            Self::V21 => "21",
        }
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named build type and its signing reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildType {
    /// Name of the signing profile this build type is signed with
    pub signing_config: String,
}

/// The validated in-memory representation of the build's declarative
/// settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration {
    /// Applied plugin ids, in application order
    pub plugins: Vec<String>,
    /// Package namespace (reverse-domain identifier)
    pub namespace: String,
    /// Application identifier (reverse-domain identifier)
    pub application_id: String,
    /// SDK level the sources are compiled against
    pub compile_sdk: u32,
    /// NDK version, when native code is built
    pub ndk_version: Option<String>,
    /// Lowest supported SDK level
    pub min_sdk: u32,
    /// SDK level the application targets
    pub target_sdk: u32,
    /// Release counter; monotonicity across releases is owned by the
    /// external release process
    pub version_code: u32,
    /// Human-readable version string
    pub version_name: String,
    /// Java language level of the sources
    pub source_compatibility: JavaVersion,
    /// Java language level of the produced bytecode
    pub target_compatibility: JavaVersion,
    /// Kotlin JVM target; equals `target_compatibility`
    pub kotlin_jvm_target: JavaVersion,
    /// Declared build types by name
    pub build_types: BTreeMap<String, BuildType>,
}

impl BuildConfiguration {
    /// Map this configuration back onto the raw document model.
    ///
    /// Reloading the resulting document yields an identical configuration.
    pub fn to_document(&self) -> Document {
        Document {
            plugins: self.plugins.clone(),
            android: Some(AndroidSection {
                namespace: Some(self.namespace.clone()),
                compile_sdk: Some(i64::from(self.compile_sdk)),
                ndk_version: self.ndk_version.clone(),
                compile_options: Some(CompileOptionsSection {
                    source_compatibility: Some(self.source_compatibility.as_str().to_string()),
                    target_compatibility: Some(self.target_compatibility.as_str().to_string()),
                }),
                kotlin_options: Some(KotlinOptionsSection {
                    jvm_target: Some(self.kotlin_jvm_target.as_str().to_string()),
                }),
                default_config: Some(DefaultConfigSection {
                    application_id: Some(self.application_id.clone()),
                    min_sdk: Some(i64::from(self.min_sdk)),
                    target_sdk: Some(i64::from(self.target_sdk)),
                    version_code: Some(i64::from(self.version_code)),
                    version_name: Some(self.version_name.clone()),
                }),
                build_types: self
                    .build_types
                    .iter()
                    .map(|(name, build_type)| {
                        (
                            name.clone(),
                            BuildTypeSection {
                                signing_config: Some(build_type.signing_config.clone()),
                            },
                        )
                    })
                    .collect(),
            }),
        }
    }

    /// Serialize this configuration to the document format.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Serialize`] if TOML serialization fails.
    pub fn to_document_string(&self) -> Result<String> {
        Ok(toml::to_string(&self.to_document())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_version_round_trips_names() {
        for name in JavaVersion::NAMES {
            assert_eq!(JavaVersion::parse(name).unwrap().as_str(), *name);
        }
        assert!(JavaVersion::parse("12").is_none());
        assert!(JavaVersion::parse("VERSION_11").is_none());
    }

    #[test]
    fn test_package_id_pattern() {
        assert!(PACKAGE_ID.is_match("com.example.devdeck"));
        assert!(PACKAGE_ID.is_match("io.devdeck.app_v2"));
        assert!(!PACKAGE_ID.is_match("devdeck"));
        assert!(!PACKAGE_ID.is_match("com.1example"));
        assert!(!PACKAGE_ID.is_match("com..example"));
        assert!(!PACKAGE_ID.is_match(""));
    }

    #[test]
    fn test_version_name_pattern() {
        assert!(VERSION_NAME.is_match("1.0"));
        assert!(VERSION_NAME.is_match("1.0.0"));
        assert!(VERSION_NAME.is_match("2.3.1-beta.1"));
        assert!(VERSION_NAME.is_match("1.0+42"));
        assert!(!VERSION_NAME.is_match("one point oh"));
        assert!(!VERSION_NAME.is_match("v1.0"));
    }

    #[test]
    fn test_to_document_uses_host_key_paths() {
        let config = BuildConfiguration {
            plugins: vec![ANDROID_APPLICATION_PLUGIN.to_string()],
            namespace: "com.example.devdeck".to_string(),
            application_id: "com.example.devdeck".to_string(),
            compile_sdk: 34,
            ndk_version: None,
            min_sdk: 21,
            target_sdk: 34,
            version_code: 1,
            version_name: "1.0.0".to_string(),
            source_compatibility: JavaVersion::V11,
            target_compatibility: JavaVersion::V11,
            kotlin_jvm_target: JavaVersion::V11,
            build_types: BTreeMap::from([(
                "release".to_string(),
                BuildType {
                    signing_config: "debug".to_string(),
                },
            )]),
        };

        let rendered = config.to_document_string().unwrap();
        assert!(rendered.contains("[android.defaultConfig]"));
        assert!(rendered.contains("applicationId = \"com.example.devdeck\""));
        assert!(rendered.contains("compileSdk = 34"));
        assert!(rendered.contains("[android.buildTypes.release]"));
        assert!(rendered.contains("signingConfig = \"debug\""));
        assert!(!rendered.contains("ndkVersion"));
    }
}
