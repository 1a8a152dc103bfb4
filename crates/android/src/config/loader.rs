//! Configuration loading
//!
//! [`ConfigLoader`] is the single entry point: it parses a declarative build
//! document, merges host-injected fallbacks, and validates the result into a
//! [`BuildConfiguration`]. Loading is single-shot and synchronous; the only
//! side effects are log events.

use crate::config::document::Document;
use crate::config::schema::{
    ANDROID_APPLICATION_PLUGIN, BuildConfiguration, BuildType, FLUTTER_GRADLE_PLUGIN, JavaVersion,
    KOTLIN_ANDROID_PLUGIN, NDK_VERSION, PACKAGE_ID, VERSION_NAME,
};
use crate::error::{ConfigError, Result};
use crate::signing::{DEBUG_PROFILE, SigningProfiles};
use devdeck_core::validation::{ValidationResult, Validator};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Values the host build tool injects instead of declaring in the document.
///
/// The original pipeline resolves version metadata from ambient tool state;
/// here the host passes it explicitly at loader construction, so there are
/// no hidden globals. Document values always win over these fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostContext {
    /// Fallback for `android.defaultConfig.versionCode`
    pub version_code: Option<u32>,
    /// Fallback for `android.defaultConfig.versionName`
    pub version_name: Option<String>,
    /// Fallback for `android.ndkVersion`
    pub ndk_version: Option<String>,
}

impl HostContext {
    /// Create an empty host context (no fallbacks)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to set the version code fallback
    #[must_use]
    pub fn with_version_code(mut self, version_code: u32) -> Self {
        self.version_code = Some(version_code);
        self
    }

    /// Builder-style method to set the version name fallback
    #[must_use]
    pub fn with_version_name(mut self, version_name: impl Into<String>) -> Self {
        self.version_name = Some(version_name.into());
        self
    }

    /// Builder-style method to set the NDK version fallback
    #[must_use]
    pub fn with_ndk_version(mut self, ndk_version: impl Into<String>) -> Self {
        self.ndk_version = Some(ndk_version.into());
        self
    }
}

/// Loads and validates build-configuration documents.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    profiles: SigningProfiles,
    host: HostContext,
}

impl ConfigLoader {
    /// Create a loader with the default signing profile set and no host
    /// fallbacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to set the declared signing profiles
    #[must_use]
    pub fn with_profiles(mut self, profiles: SigningProfiles) -> Self {
        self.profiles = profiles;
        self
    }

    /// Builder-style method to set the host context
    #[must_use]
    pub fn with_host(mut self, host: HostContext) -> Self {
        self.host = host;
        self
    }

    /// The declared signing profiles
    pub fn profiles(&self) -> &SigningProfiles {
        &self.profiles
    }

    /// Load a configuration from document text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the document is not well-formed,
    /// [`ConfigError::MissingField`] / [`ConfigError::InvalidValue`] /
    /// [`ConfigError::UnresolvedReference`] on validation failure.
    pub fn load(&self, source: &str) -> Result<BuildConfiguration> {
        let document: Document = toml::from_str(source)?;
        self.load_document(document)
    }

    /// Load a configuration from an already-parsed document
    pub fn load_document(&self, document: Document) -> Result<BuildConfiguration> {
        let raw = RawConfig::from_document(document, &self.host)?;

        let report = raw.validate(&self.profiles);
        for issue in report.warnings() {
            warn!(field = %issue.field, "{}", issue.message);
        }
        report.into_result::<ConfigError>()?;

        let config = raw.into_configuration()?;
        debug!(
            application_id = %config.application_id,
            version_code = config.version_code,
            "loaded build configuration"
        );
        Ok(config)
    }

    /// Load a configuration from a file
    pub fn load_path(&self, path: &Path) -> Result<BuildConfiguration> {
        let source = std::fs::read_to_string(path)?;
        self.load(&source)
    }
}

fn require<T>(field: impl Into<String>, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| ConfigError::MissingField(field.into()))
}

/// Field-complete but not yet value-checked configuration. Numbers stay wide
/// and language levels stay raw strings until validation has passed.
#[derive(Debug)]
struct RawConfig {
    plugins: Vec<String>,
    namespace: String,
    compile_sdk: i64,
    ndk_version: Option<String>,
    application_id: String,
    min_sdk: i64,
    target_sdk: i64,
    version_code: i64,
    version_name: String,
    source_compatibility: String,
    target_compatibility: String,
    kotlin_jvm_target: Option<String>,
    build_types: BTreeMap<String, String>,
}

impl RawConfig {
    /// Check presence of every required key, merging host fallbacks.
    /// Missing keys are reported by full key path.
    fn from_document(document: Document, host: &HostContext) -> Result<Self> {
        if document.plugins.is_empty() {
            return Err(ConfigError::missing("plugins"));
        }

        let android = require("android", document.android)?;
        let compile_options = android.compile_options.unwrap_or_default();
        let kotlin_options = android.kotlin_options.unwrap_or_default();
        let default_config = android.default_config.unwrap_or_default();

        let mut build_types = BTreeMap::new();
        for (name, build_type) in android.build_types {
            let signing_config = require(
                format!("android.buildTypes.{name}.signingConfig"),
                build_type.signing_config,
            )?;
            build_types.insert(name, signing_config);
        }

        Ok(Self {
            plugins: document.plugins,
            namespace: require("android.namespace", android.namespace)?,
            compile_sdk: require("android.compileSdk", android.compile_sdk)?,
            ndk_version: android.ndk_version.or_else(|| host.ndk_version.clone()),
            application_id: require(
                "android.defaultConfig.applicationId",
                default_config.application_id,
            )?,
            min_sdk: require("android.defaultConfig.minSdk", default_config.min_sdk)?,
            target_sdk: require("android.defaultConfig.targetSdk", default_config.target_sdk)?,
            version_code: require(
                "android.defaultConfig.versionCode",
                default_config
                    .version_code
                    .or_else(|| host.version_code.map(i64::from)),
            )?,
            version_name: require(
                "android.defaultConfig.versionName",
                default_config
                    .version_name
                    .or_else(|| host.version_name.clone()),
            )?,
            source_compatibility: require(
                "android.compileOptions.sourceCompatibility",
                compile_options.source_compatibility,
            )?,
            target_compatibility: require(
                "android.compileOptions.targetCompatibility",
                compile_options.target_compatibility,
            )?,
            kotlin_jvm_target: kotlin_options.jvm_target,
            build_types,
        })
    }

    /// Run every value and cross-field check. Errors abort the load; the
    /// warnings are advisory and surface through the log.
    fn validate(&self, profiles: &SigningProfiles) -> ValidationResult {
        const MAX: i64 = u32::MAX as i64;

        let mut validator = Validator::new()
            .pattern(
                "android.namespace",
                &self.namespace,
                &PACKAGE_ID,
                "a reverse-domain identifier",
            )
            .pattern(
                "android.defaultConfig.applicationId",
                &self.application_id,
                &PACKAGE_ID,
                "a reverse-domain identifier",
            )
            .range("android.compileSdk", self.compile_sdk, 1, MAX)
            .range("android.defaultConfig.minSdk", self.min_sdk, 1, MAX)
            .range("android.defaultConfig.targetSdk", self.target_sdk, 1, MAX)
            .range("android.defaultConfig.versionCode", self.version_code, 1, MAX)
            .non_empty("android.defaultConfig.versionName", &self.version_name)
            .pattern(
                "android.defaultConfig.versionName",
                &self.version_name,
                &VERSION_NAME,
                "a semantic-version-like string",
            )
            .custom("android.defaultConfig.minSdk", || {
                (self.min_sdk > self.target_sdk).then(|| {
                    format!(
                        "minSdk {} exceeds targetSdk {}",
                        self.min_sdk, self.target_sdk
                    )
                })
            })
            .custom("android.defaultConfig.targetSdk", || {
                (self.target_sdk > self.compile_sdk).then(|| {
                    format!(
                        "targetSdk {} exceeds compileSdk {}",
                        self.target_sdk, self.compile_sdk
                    )
                })
            })
            .one_of(
                "android.compileOptions.sourceCompatibility",
                &self.source_compatibility,
                JavaVersion::NAMES,
            )
            .one_of(
                "android.compileOptions.targetCompatibility",
                &self.target_compatibility,
                JavaVersion::NAMES,
            )
            .custom("android.compileOptions.sourceCompatibility", || {
                (self.source_compatibility != self.target_compatibility).then(|| {
                    format!(
                        "sourceCompatibility {} must equal targetCompatibility {}",
                        self.source_compatibility, self.target_compatibility
                    )
                })
            })
            .custom("plugins", || {
                (!self.has_plugin(ANDROID_APPLICATION_PLUGIN))
                    .then(|| format!("{ANDROID_APPLICATION_PLUGIN} must be applied"))
            })
            .custom("plugins", || {
                self.plugins
                    .iter()
                    .enumerate()
                    .find(|&(i, plugin)| self.plugins[..i].contains(plugin))
                    .map(|(_, plugin)| format!("plugin {plugin} is applied twice"))
            })
            .custom("plugins", || {
                let flutter = self.plugin_position(FLUTTER_GRADLE_PLUGIN)?;
                let before_android = self
                    .plugin_position(ANDROID_APPLICATION_PLUGIN)
                    .is_some_and(|p| p > flutter);
                let before_kotlin = self
                    .plugin_position(KOTLIN_ANDROID_PLUGIN)
                    .is_some_and(|p| p > flutter);
                (before_android || before_kotlin).then(|| {
                    format!(
                        "{FLUTTER_GRADLE_PLUGIN} must be applied after the Android and Kotlin plugins"
                    )
                })
            });

        if let Some(jvm_target) = &self.kotlin_jvm_target {
            validator = validator
                .one_of("android.kotlinOptions.jvmTarget", jvm_target, JavaVersion::NAMES)
                .custom("android.kotlinOptions.jvmTarget", || {
                    (*jvm_target != self.target_compatibility).then(|| {
                        format!(
                            "jvmTarget {} must equal targetCompatibility {}",
                            jvm_target, self.target_compatibility
                        )
                    })
                });
        }

        if let Some(ndk_version) = &self.ndk_version {
            validator = validator.pattern(
                "android.ndkVersion",
                ndk_version,
                &NDK_VERSION,
                "a dotted numeric version",
            );
        }

        let declared: Vec<&str> = profiles.names().collect();
        for (name, signing_config) in &self.build_types {
            let field = format!("android.buildTypes.{name}.signingConfig");
            validator = validator
                .resolves(&field, signing_config, &declared)
                .warn_if(
                    &field,
                    name != DEBUG_PROFILE && signing_config == DEBUG_PROFILE,
                    "build type is signed with the debug profile",
                );
        }

        validator.validate()
    }

    /// Narrow into the validated schema. Every fallible step here was
    /// already checked by `validate`, so failures keep the same taxonomy.
    fn into_configuration(self) -> Result<BuildConfiguration> {
        let source_compatibility = parse_level(
            "android.compileOptions.sourceCompatibility",
            &self.source_compatibility,
        )?;
        let target_compatibility = parse_level(
            "android.compileOptions.targetCompatibility",
            &self.target_compatibility,
        )?;
        let kotlin_jvm_target = match &self.kotlin_jvm_target {
            Some(level) => parse_level("android.kotlinOptions.jvmTarget", level)?,
            None => target_compatibility,
        };

        Ok(BuildConfiguration {
            plugins: self.plugins,
            namespace: self.namespace,
            application_id: self.application_id,
            compile_sdk: to_sdk("android.compileSdk", self.compile_sdk)?,
            ndk_version: self.ndk_version,
            min_sdk: to_sdk("android.defaultConfig.minSdk", self.min_sdk)?,
            target_sdk: to_sdk("android.defaultConfig.targetSdk", self.target_sdk)?,
            version_code: to_sdk("android.defaultConfig.versionCode", self.version_code)?,
            version_name: self.version_name,
            source_compatibility,
            target_compatibility,
            kotlin_jvm_target,
            build_types: self
                .build_types
                .into_iter()
                .map(|(name, signing_config)| (name, BuildType { signing_config }))
                .collect(),
        })
    }

    fn has_plugin(&self, id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin == id)
    }

    fn plugin_position(&self, id: &str) -> Option<usize> {
        self.plugins.iter().position(|plugin| plugin == id)
    }
}

fn parse_level(field: &str, value: &str) -> Result<JavaVersion> {
    JavaVersion::parse(value).ok_or_else(|| {
        ConfigError::invalid(
            field,
            format!("must be one of: {}", JavaVersion::NAMES.join(", ")),
        )
    })
}

fn to_sdk(field: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ConfigError::invalid(field, "must be a positive integer"))
}
