//! Predefined expected-data templates for metric, trace, and log validation.
//!
//! Every template is packaged into the binary with `include_str!` and addressed
//! by a relative resource name. A [`TemplateSource::Directory`] can point the
//! registry at an on-disk copy of the same layout instead.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::anyhow;
use serde::Serialize;

use crate::resource::ResourcePath;

/// Directory prefix shared by all packaged template resource names.
pub const TEMPLATE_DIR: &str = "expected-data-template";

/// Packaged template contents keyed by resource name.
static EMBEDDED_RESOURCES: &[(&str, &str)] = &[
    (
        "expected-data-template/defaultExpectedMetric.mustache",
        include_str!("../templates/expected-data-template/defaultExpectedMetric.mustache"),
    ),
    (
        "expected-data-template/enhancedExpectedMetric.mustache",
        include_str!("../templates/expected-data-template/enhancedExpectedMetric.mustache"),
    ),
    (
        "expected-data-template/statsdExpectedMetric.mustache",
        include_str!("../templates/expected-data-template/statsdExpectedMetric.mustache"),
    ),
    (
        "expected-data-template/ecsContainerExpectedMetric.mustache",
        include_str!("../templates/expected-data-template/ecsContainerExpectedMetric.mustache"),
    ),
    (
        "expected-data-template/containerInsightEksExpectedMetric.mustache",
        include_str!(
            "../templates/expected-data-template/containerInsightEksExpectedMetric.mustache"
        ),
    ),
    (
        "expected-data-template/defaultExpectedTrace.mustache",
        include_str!("../templates/expected-data-template/defaultExpectedTrace.mustache"),
    ),
    (
        "expected-data-template/xrayAwsSdkExpectedTrace.mustache",
        include_str!("../templates/expected-data-template/xrayAwsSdkExpectedTrace.mustache"),
    ),
    (
        "expected-data-template/xrayHttpExpectedTrace.mustache",
        include_str!("../templates/expected-data-template/xrayHttpExpectedTrace.mustache"),
    ),
    (
        "expected-data-template/otelSdkAwsSdkExpectedTrace.mustache",
        include_str!("../templates/expected-data-template/otelSdkAwsSdkExpectedTrace.mustache"),
    ),
    (
        "expected-data-template/otelSdkHttpExpectedTrace.mustache",
        include_str!("../templates/expected-data-template/otelSdkHttpExpectedTrace.mustache"),
    ),
    (
        "expected-data-template/defaultExpectedLog.mustache",
        include_str!("../templates/expected-data-template/defaultExpectedLog.mustache"),
    ),
];

/// Returns the packaged content for a resource name, if one is packaged.
pub fn embedded_content(name: &str) -> Option<&'static str> {
    EMBEDDED_RESOURCES
        .iter()
        .find(|(resource, _)| *resource == name)
        .map(|(_, content)| *content)
}

/// Something that can be located as a readable resource.
pub trait FileConfig {
    /// Resolves the resource location, or `None` when nothing backs it.
    fn path(&self) -> Option<ResourcePath>;
}

/// The telemetry signal a template describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Metric,
    Trace,
    Log,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemplateKind::Metric => "metric",
            TemplateKind::Trace => "trace",
            TemplateKind::Log => "log",
        })
    }
}

/// The predefined expected templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Metrics emitted by the default metric sample app.
    DefaultExpectedMetric,
    /// Default metrics with API name and status code dimensions.
    EnhancedExpectedMetric,
    /// Gauges and counters received through the StatsD receiver.
    StatsdExpectedMetric,
    /// ECS task-level container metrics.
    EcsContainerExpectedMetric,
    /// Container Insights metrics on EKS.
    ContainerInsightEksExpectedMetric,
    /// Spans emitted by the default trace sample app.
    DefaultExpectedTrace,
    /// X-Ray SDK segments around an AWS SDK call.
    XrayAwsSdkExpectedTrace,
    /// X-Ray SDK segments around an outgoing HTTP call.
    XrayHttpExpectedTrace,
    /// OpenTelemetry SDK spans around an AWS SDK call.
    OtelSdkAwsSdkExpectedTrace,
    /// OpenTelemetry SDK spans around an outgoing HTTP call.
    OtelSdkHttpExpectedTrace,
    /// Log events shipped to CloudWatch Logs.
    DefaultExpectedLog,
}

impl TemplateId {
    /// Returns all predefined templates in declared order.
    pub fn all() -> &'static [TemplateId] {
        &[
            TemplateId::DefaultExpectedMetric,
            TemplateId::EnhancedExpectedMetric,
            TemplateId::StatsdExpectedMetric,
            TemplateId::EcsContainerExpectedMetric,
            TemplateId::ContainerInsightEksExpectedMetric,
            TemplateId::DefaultExpectedTrace,
            TemplateId::XrayAwsSdkExpectedTrace,
            TemplateId::XrayHttpExpectedTrace,
            TemplateId::OtelSdkAwsSdkExpectedTrace,
            TemplateId::OtelSdkHttpExpectedTrace,
            TemplateId::DefaultExpectedLog,
        ]
    }

    /// Returns the command-line name of this template.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateId::DefaultExpectedMetric => "default-expected-metric",
            TemplateId::EnhancedExpectedMetric => "enhanced-expected-metric",
            TemplateId::StatsdExpectedMetric => "statsd-expected-metric",
            TemplateId::EcsContainerExpectedMetric => "ecs-container-expected-metric",
            TemplateId::ContainerInsightEksExpectedMetric => {
                "container-insight-eks-expected-metric"
            }
            TemplateId::DefaultExpectedTrace => "default-expected-trace",
            TemplateId::XrayAwsSdkExpectedTrace => "xray-awssdk-expected-trace",
            TemplateId::XrayHttpExpectedTrace => "xray-http-expected-trace",
            TemplateId::OtelSdkAwsSdkExpectedTrace => "otel-sdk-awssdk-expected-trace",
            TemplateId::OtelSdkHttpExpectedTrace => "otel-sdk-http-expected-trace",
            TemplateId::DefaultExpectedLog => "default-expected-log",
        }
    }

    /// Returns the resource name, relative to the template root.
    pub fn resource_name(&self) -> &'static str {
        match self {
            TemplateId::DefaultExpectedMetric => {
                "expected-data-template/defaultExpectedMetric.mustache"
            }
            TemplateId::EnhancedExpectedMetric => {
                "expected-data-template/enhancedExpectedMetric.mustache"
            }
            TemplateId::StatsdExpectedMetric => {
                "expected-data-template/statsdExpectedMetric.mustache"
            }
            TemplateId::EcsContainerExpectedMetric => {
                "expected-data-template/ecsContainerExpectedMetric.mustache"
            }
            TemplateId::ContainerInsightEksExpectedMetric => {
                "expected-data-template/containerInsightEksExpectedMetric.mustache"
            }
            TemplateId::DefaultExpectedTrace => {
                "expected-data-template/defaultExpectedTrace.mustache"
            }
            TemplateId::XrayAwsSdkExpectedTrace => {
                "expected-data-template/xrayAwsSdkExpectedTrace.mustache"
            }
            TemplateId::XrayHttpExpectedTrace => {
                "expected-data-template/xrayHttpExpectedTrace.mustache"
            }
            TemplateId::OtelSdkAwsSdkExpectedTrace => {
                "expected-data-template/otelSdkAwsSdkExpectedTrace.mustache"
            }
            TemplateId::OtelSdkHttpExpectedTrace => {
                "expected-data-template/otelSdkHttpExpectedTrace.mustache"
            }
            TemplateId::DefaultExpectedLog => "expected-data-template/defaultExpectedLog.mustache",
        }
    }

    /// Returns the signal this template describes.
    pub fn kind(&self) -> TemplateKind {
        match self {
            TemplateId::DefaultExpectedMetric
            | TemplateId::EnhancedExpectedMetric
            | TemplateId::StatsdExpectedMetric
            | TemplateId::EcsContainerExpectedMetric
            | TemplateId::ContainerInsightEksExpectedMetric => TemplateKind::Metric,
            TemplateId::DefaultExpectedTrace
            | TemplateId::XrayAwsSdkExpectedTrace
            | TemplateId::XrayHttpExpectedTrace
            | TemplateId::OtelSdkAwsSdkExpectedTrace
            | TemplateId::OtelSdkHttpExpectedTrace => TemplateKind::Trace,
            TemplateId::DefaultExpectedLog => TemplateKind::Log,
        }
    }

    /// Resolves this template against the given source.
    pub fn resolve(&self, source: &TemplateSource) -> Option<ResourcePath> {
        match source {
            TemplateSource::Embedded => self.path(),
            TemplateSource::Directory(dir) => {
                let path = dir.join(self.resource_name());
                if path.is_file() {
                    Some(ResourcePath::File(path))
                } else {
                    log::debug!("{} not found at {}", self.name(), path.display());
                    None
                }
            }
        }
    }
}

impl FileConfig for TemplateId {
    fn path(&self) -> Option<ResourcePath> {
        let name = self.resource_name();
        embedded_content(name).map(|_| ResourcePath::Embedded(name.to_string()))
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::all()
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| anyhow!("unknown template '{}'", s))
    }
}

/// Where predefined templates are resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// Templates packaged into the binary.
    #[default]
    Embedded,
    /// An on-disk directory laid out like the packaged templates.
    Directory(PathBuf),
}
