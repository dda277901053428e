//! EMR cluster idle detection via CloudWatch.
//!
//! The `AWS/ElasticMapReduce IsIdle` metric emits one datapoint per
//! 5-minute period. A cluster counts as idle over a window when every
//! datapoint in the window is 1.0, i.e. when the `${SUM}` label equals the
//! number of periods.

use std::time::{Duration, SystemTime};

use anyhow::{anyhow, Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{
    Dimension, Metric, MetricDataQuery, MetricStat, ScanBy, StandardUnit,
};

// 5-minute datapoints are available for 63 days.
const PERIOD_SECONDS: u64 = 300;

/// Result of an idleness query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdleReport {
    /// True when the cluster was idle for the whole requested window.
    pub is_idle: bool,
    /// Length of the most recent uninterrupted idle stretch, in minutes.
    pub idle_minutes: u32,
}

pub struct CloudWatch {
    client: aws_sdk_cloudwatch::Client,
}

impl CloudWatch {
    pub async fn new(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;
        CloudWatch {
            client: aws_sdk_cloudwatch::Client::new(&config),
        }
    }

    /// Queries the IsIdle metric for a cluster over the last
    /// `idleness_hours` hours.
    pub async fn emr_idle_report(&self, cluster_id: &str, idleness_hours: u64) -> Result<IdleReport> {
        let window = Duration::from_secs(idleness_hours * 3600);
        let now = SystemTime::now();

        let query = MetricDataQuery::builder()
            .id("emrIdleClusters")
            .metric_stat(
                MetricStat::builder()
                    .metric(
                        Metric::builder()
                            .namespace("AWS/ElasticMapReduce")
                            .metric_name("IsIdle")
                            .dimensions(
                                Dimension::builder()
                                    .name("JobFlowId")
                                    .value(cluster_id)
                                    .build(),
                            )
                            .build(),
                    )
                    .period(PERIOD_SECONDS as i32)
                    .stat("Maximum")
                    .unit(StandardUnit::None)
                    .build(),
            )
            .label("${SUM}")
            .return_data(true)
            .build();

        let response = self
            .client
            .get_metric_data()
            .metric_data_queries(query)
            .start_time(DateTime::from(now - window))
            .end_time(DateTime::from(now))
            .scan_by(ScanBy::TimestampDescending)
            .send()
            .await
            .with_context(|| format!("couldn't query IsIdle for cluster {cluster_id}"))?;

        let result = response
            .metric_data_results()
            .first()
            .ok_or_else(|| anyhow!("no metric data in response"))?;

        let expected_periods = window.as_secs() / PERIOD_SECONDS;
        let is_idle = result.label() == Some(expected_periods.to_string().as_str());

        let mut idle_minutes = 0;
        for value in result.values() {
            if *value == 1.0 {
                idle_minutes += 5;
            } else {
                break;
            }
        }

        Ok(IdleReport { is_idle, idle_minutes })
    }
}
