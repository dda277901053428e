//! Derivation of EMR configuration blocks for the Spark stack.
//!
//! Sizing follows the rules described in
//! <https://github.com/vbmacher/knowledge-notes/blob/master/spark/spark-parameters/spark-parameters.md>:
//! 5 cores per executor, one core per node reserved for the OS and one
//! executor slot reserved for the YARN ApplicationMaster.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ec2;
use crate::errors::{SparkError, SparkResult};

pub const DEFAULT_DFS_REPLICATION: u32 = 2;
pub const DEFAULT_LIVY_SESSION_TIMEOUT: &str = "12h";
pub const DEFAULT_FS_S3_MAX_CONNECTIONS: u32 = 100;

/// One EMR configuration block: a classification plus its properties.
///
/// The EMR API requires every property value to be a string, so computed
/// numbers are stringified on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(rename = "Classification")]
    pub classification: String,
    #[serde(rename = "Properties")]
    pub properties: BTreeMap<String, String>,
}

impl Configuration {
    pub fn new<I, K, V>(classification: &str, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Configuration {
            classification: classification.to_string(),
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Input for the YARN CapacityScheduler section of [`yarn_site_configurations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityScheduler {
    pub instance_type: String,
    pub node_count: u32,
}

fn lookup(instance_type: &str) -> SparkResult<&'static ec2::Ec2Instance> {
    ec2::instance(instance_type)
        .ok_or_else(|| SparkError::InvalidHardwareProfile(instance_type.to_string()))
}

/// Generates the `spark` and `spark-defaults` configuration blocks for an
/// EMR cluster of `node_count` nodes of the given instance type (master
/// included in the count).
pub fn spark_configurations(instance_type: &str, node_count: u32) -> SparkResult<Vec<Configuration>> {
    let ec2 = lookup(instance_type)?;
    if ec2.cpu <= 1 {
        return Err(SparkError::InvalidHardwareProfile(format!(
            "{instance_type}: executors need at least 2 vCPUs per node"
        )));
    }
    if node_count < 1 {
        return Err(SparkError::InvalidArgument(
            "node count must be at least 1".to_string(),
        ));
    }

    // Memory flags take decimal-GB values while the catalog is in GiB.
    let gbits2gbytes = 1.07374;

    let spark_cores: u32 = 5;
    let executors_per_node = f64::from(ec2.cpu - 1) / f64::from(spark_cores);
    // 1 executor is reserved for the ApplicationMaster in YARN.
    let executors = (executors_per_node * f64::from(node_count) - 1.0).trunc() as i64;
    let executors = executors.max(1);
    let raw_memory_per_executor = ec2.memory / executors_per_node;
    let memory_overhead = (0.07 * raw_memory_per_executor).max(0.384);
    let memory_per_executor = ((raw_memory_per_executor - memory_overhead) * gbits2gbytes) as i64;
    let driver_cores = ec2.cpu;
    let driver_memory = (memory_per_executor as f64 * 0.6).floor() as i64;
    let default_parallelism = (executors_per_node * f64::from(spark_cores) * 2.0).ceil() as i64;

    Ok(vec![
        Configuration::new("spark", [("maximizeResourceAllocation", "false")]),
        Configuration::new(
            "spark-defaults",
            [
                (
                    "spark.sql.parquet.fs.optimized.committer.optimization-enabled",
                    "true".to_string(),
                ),
                ("spark.network.timeout", "300s".to_string()),
                ("spark.sql.broadcastTimeout", "108000".to_string()),
                (
                    "spark.sql.hive.filesourcePartitionFileCacheSize",
                    "1073741824".to_string(),
                ),
                ("spark.rpc.message.maxSize", "2047".to_string()),
                ("spark.rpc.askTimeout", "300".to_string()),
                ("spark.task.maxFailures", "10".to_string()),
                (
                    "spark.serializer",
                    "org.apache.spark.serializer.KryoSerializer".to_string(),
                ),
                ("spark.shuffle.service.enabled", "true".to_string()),
                ("spark.dynamicAllocation.enabled", "true".to_string()),
                ("spark.executor.heartbeatInterval", "20s".to_string()),
                ("spark.executor.extraJavaOptions", "-XX:+UseG1GC".to_string()),
                ("spark.cleaner.periodicGC.interval", "600min".to_string()),
                ("spark.executor.cores", spark_cores.to_string()),
                ("spark.executor.memory", format!("{memory_per_executor}G")),
                ("spark.executor.instances", executors.to_string()),
                ("spark.driver.cores", driver_cores.to_string()),
                ("spark.driver.memory", format!("{driver_memory}G")),
                ("spark.driver.maxResultSize", format!("{driver_memory}G")),
                ("spark.default.parallelism", default_parallelism.to_string()),
                ("spark.sql.shuffle.partitions", "1200".to_string()),
            ],
        ),
    ])
}

/// Generates the `yarn-site` configuration block.
///
/// `remote_log_dir` turns on log aggregation into the given S3 path;
/// `capacity_scheduler` sets up the YARN CapacityScheduler with a preemption
/// pace derived from the cluster shape. Both sections are independent and
/// additive; with neither the block carries no properties, which EMR accepts.
pub fn yarn_site_configurations(
    remote_log_dir: Option<&str>,
    capacity_scheduler: Option<&CapacityScheduler>,
) -> SparkResult<Vec<Configuration>> {
    let mut properties: BTreeMap<String, String> = BTreeMap::new();

    if let Some(dir) = remote_log_dir {
        properties.insert("yarn.log-aggregation-enable".to_string(), "true".to_string());
        properties.insert(
            "yarn.log-aggregation.retain-seconds".to_string(),
            "-1".to_string(),
        );
        properties.insert(
            "yarn.nodemanager.remote-app-log-dir".to_string(),
            dir.to_string(),
        );
    }

    if let Some(scheduler) = capacity_scheduler {
        if scheduler.node_count < 1 {
            return Err(SparkError::InvalidArgument(
                "node count must be at least 1".to_string(),
            ));
        }
        // The maximum share of resources preempted in a single round, i.e.
        // (memory-of-one-NodeManager)/(total-cluster-memory).
        let node_memory = lookup(&scheduler.instance_type)?.memory;
        let total_preemption_per_round =
            node_memory / (node_memory * f64::from(scheduler.node_count));

        properties.insert(
            "yarn.resourcemanager.scheduler.class".to_string(),
            "org.apache.hadoop.yarn.server.resourcemanager.scheduler.capacity.CapacityScheduler"
                .to_string(),
        );
        properties.insert(
            "yarn.resourcemanager.scheduler.monitor.enable".to_string(),
            "true".to_string(),
        );
        properties.insert(
            "yarn.resourcemanager.scheduler.monitor.policies".to_string(),
            "org.apache.hadoop.yarn.server.resourcemanager.monitor.capacity.ProportionalCapacityPreemptionPolicy"
                .to_string(),
        );
        properties.insert(
            "yarn.scheduler.capacity.resource-calculator".to_string(),
            "org.apache.hadoop.yarn.util.resource.DominantResourceCalculator".to_string(),
        );
        properties.insert(
            "yarn.resourcemanager.monitor.capacity.preemption.total_preemption_per_round"
                .to_string(),
            total_preemption_per_round.to_string(),
        );
    }

    Ok(vec![Configuration {
        classification: "yarn-site".to_string(),
        properties,
    }])
}

/// Generates the `hdfs-site` configuration block.
pub fn hdfs_site_configuration(dfs_replication: u32) -> SparkResult<Vec<Configuration>> {
    if dfs_replication < 1 {
        return Err(SparkError::InvalidArgument(
            "dfs.replication must be at least 1".to_string(),
        ));
    }
    Ok(vec![Configuration::new(
        "hdfs-site",
        [("dfs.replication", dfs_replication.to_string())],
    )])
}

/// Generates the `livy-conf` configuration block.
pub fn livy_configuration(session_timeout: &str) -> Vec<Configuration> {
    vec![Configuration::new(
        "livy-conf",
        [("livy.server.session.timeout", session_timeout)],
    )]
}

/// Generates the `emrfs-site` configuration block. Raising the connection
/// pool limit addresses the "Timeout waiting for connection from pool" error.
pub fn emrfs_site_configuration(fs_s3_max_connections: u32) -> SparkResult<Vec<Configuration>> {
    if fs_s3_max_connections < 1 {
        return Err(SparkError::InvalidArgument(
            "fs.s3.maxConnections must be at least 1".to_string(),
        ));
    }
    Ok(vec![Configuration::new(
        "emrfs-site",
        [("fs.s3.maxConnections", fs_s3_max_connections.to_string())],
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spark_sizing_for_xlarge_three_nodes() {
        // m5.xlarge: 4 vCPU, 16 GiB. executors_per_node = 3/5 = 0.6,
        // executors = max(1, trunc(0.6*3 - 1)) = 1, raw = 16/0.6 = 26.67,
        // overhead = 1.867, memory = trunc(24.8 * 1.07374) = 26.
        let configs = spark_configurations("m5.xlarge", 3).unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].classification, "spark");
        assert_eq!(
            configs[0].properties["maximizeResourceAllocation"],
            "false"
        );

        let defaults = &configs[1];
        assert_eq!(defaults.classification, "spark-defaults");
        assert_eq!(defaults.properties["spark.executor.cores"], "5");
        assert_eq!(defaults.properties["spark.executor.instances"], "1");
        assert_eq!(defaults.properties["spark.executor.memory"], "26G");
        assert_eq!(defaults.properties["spark.driver.cores"], "4");
        assert_eq!(defaults.properties["spark.driver.memory"], "15G");
        assert_eq!(defaults.properties["spark.driver.maxResultSize"], "15G");
        assert_eq!(defaults.properties["spark.default.parallelism"], "6");
        assert_eq!(defaults.properties["spark.sql.shuffle.partitions"], "1200");
        assert_eq!(
            defaults.properties["spark.serializer"],
            "org.apache.spark.serializer.KryoSerializer"
        );
        assert_eq!(defaults.properties["spark.dynamicAllocation.enabled"], "true");
    }

    #[test]
    fn spark_sizing_is_deterministic() {
        let a = spark_configurations("r5.4xlarge", 10).unwrap();
        let b = spark_configurations("r5.4xlarge", 10).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn executor_count_never_drops_below_one() {
        // 2 vCPUs, one node: 0.2 executors per node before reservation.
        let configs = spark_configurations("m5.large", 1).unwrap();
        assert_eq!(configs[1].properties["spark.executor.instances"], "1");
    }

    #[test]
    fn single_cpu_instance_is_rejected() {
        // t2.small has one vCPU; packing would divide by zero.
        assert!(matches!(
            spark_configurations("t2.small", 3),
            Err(SparkError::InvalidHardwareProfile(_))
        ));
    }

    #[test]
    fn unknown_instance_type_is_rejected() {
        assert!(matches!(
            spark_configurations("warp9.xxlarge", 3),
            Err(SparkError::InvalidHardwareProfile(_))
        ));
    }

    #[test]
    fn zero_node_count_is_rejected() {
        assert!(matches!(
            spark_configurations("m5.xlarge", 0),
            Err(SparkError::InvalidArgument(_))
        ));
    }

    #[test]
    fn yarn_site_defaults_to_single_empty_block() {
        let configs = yarn_site_configurations(None, None).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].classification, "yarn-site");
        assert!(configs[0].properties.is_empty());
    }

    #[test]
    fn yarn_site_log_aggregation() {
        let configs = yarn_site_configurations(Some("s3://logs/yarn"), None).unwrap();
        let props = &configs[0].properties;
        assert_eq!(props["yarn.log-aggregation-enable"], "true");
        assert_eq!(props["yarn.log-aggregation.retain-seconds"], "-1");
        assert_eq!(props["yarn.nodemanager.remote-app-log-dir"], "s3://logs/yarn");
    }

    #[test]
    fn yarn_preemption_ratio_is_reciprocal_of_node_count() {
        let scheduler = CapacityScheduler {
            instance_type: "m5.xlarge".to_string(),
            node_count: 4,
        };
        let configs = yarn_site_configurations(None, Some(&scheduler)).unwrap();
        let props = &configs[0].properties;
        assert_eq!(
            props["yarn.resourcemanager.monitor.capacity.preemption.total_preemption_per_round"],
            "0.25"
        );
        assert_eq!(
            props["yarn.resourcemanager.scheduler.class"],
            "org.apache.hadoop.yarn.server.resourcemanager.scheduler.capacity.CapacityScheduler"
        );
        assert_eq!(props["yarn.resourcemanager.scheduler.monitor.enable"], "true");
    }

    #[test]
    fn yarn_preemption_ratio_ignores_node_memory() {
        // The per-node memory cancels out of the ratio; only the node count
        // matters. r5.xlarge has twice the memory of m5.xlarge.
        let small = CapacityScheduler {
            instance_type: "m5.xlarge".to_string(),
            node_count: 4,
        };
        let big = CapacityScheduler {
            instance_type: "r5.xlarge".to_string(),
            node_count: 4,
        };
        let key = "yarn.resourcemanager.monitor.capacity.preemption.total_preemption_per_round";
        let a = yarn_site_configurations(None, Some(&small)).unwrap();
        let b = yarn_site_configurations(None, Some(&big)).unwrap();
        assert_eq!(a[0].properties[key], b[0].properties[key]);
    }

    #[test]
    fn yarn_sections_are_additive() {
        let scheduler = CapacityScheduler {
            instance_type: "m5.xlarge".to_string(),
            node_count: 2,
        };
        let configs = yarn_site_configurations(Some("s3://logs"), Some(&scheduler)).unwrap();
        assert_eq!(configs.len(), 1);
        let props = &configs[0].properties;
        assert!(props.contains_key("yarn.log-aggregation-enable"));
        assert!(props.contains_key("yarn.resourcemanager.scheduler.class"));
    }

    #[test]
    fn hdfs_site_replication() {
        let configs = hdfs_site_configuration(DEFAULT_DFS_REPLICATION).unwrap();
        assert_eq!(configs[0].classification, "hdfs-site");
        assert_eq!(configs[0].properties["dfs.replication"], "2");

        assert!(matches!(
            hdfs_site_configuration(0),
            Err(SparkError::InvalidArgument(_))
        ));
    }

    #[test]
    fn livy_session_timeout() {
        let configs = livy_configuration(DEFAULT_LIVY_SESSION_TIMEOUT);
        assert_eq!(configs[0].classification, "livy-conf");
        assert_eq!(configs[0].properties["livy.server.session.timeout"], "12h");
    }

    #[test]
    fn emrfs_connection_pool() {
        let configs = emrfs_site_configuration(DEFAULT_FS_S3_MAX_CONNECTIONS).unwrap();
        assert_eq!(configs[0].classification, "emrfs-site");
        assert_eq!(configs[0].properties["fs.s3.maxConnections"], "100");
    }

    #[test]
    fn configuration_serializes_with_emr_field_names() {
        let config = Configuration::new("spark", [("maximizeResourceAllocation", "false")]);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["Classification"], "spark");
        assert_eq!(json["Properties"]["maximizeResourceAllocation"], "false");
    }
}
