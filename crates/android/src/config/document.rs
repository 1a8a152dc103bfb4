//! Raw document model
//!
//! Serde mirror of the declarative build document. Every leaf is optional so
//! that presence is checked by the loader, which reports missing keys by
//! their full key path (`android.defaultConfig.minSdk`) instead of a serde
//! message. Keys are camelCase to match the host tool's key paths.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level build document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Applied plugin ids, in application order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// The `android` block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidSection>,
}

/// The `android` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile_sdk: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndk_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile_options: Option<CompileOptionsSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kotlin_options: Option<KotlinOptionsSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_config: Option<DefaultConfigSection>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub build_types: BTreeMap<String, BuildTypeSection>,
}

/// `android.compileOptions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptionsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_compatibility: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_compatibility: Option<String>,
}

/// `android.kotlinOptions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KotlinOptionsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jvm_target: Option<String>,
}

/// `android.defaultConfig`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfigSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_sdk: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_sdk: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_code: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
}

/// One entry under `android.buildTypes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTypeSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_config: Option<String>,
}
