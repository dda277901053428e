//! EMR cluster lifecycle collaborator.
//!
//! Thin wrapper around the AWS SDK: one method per API call, no retries
//! (cluster operations are not idempotent at this layer; a retried
//! `run_job_flow` would create a duplicate cluster). Failures are propagated
//! to the caller unchanged.

use anyhow::{anyhow, Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_emr::types::{
    ActionOnFailure, Application, BootstrapActionConfig, Cluster, Command,
    Configuration as AwsConfiguration, EbsBlockDeviceConfig, EbsConfiguration,
    HadoopJarStepConfig, InstanceFleetConfig, InstanceFleetProvisioningSpecifications,
    InstanceFleetType, InstanceGroupConfig, InstanceRoleType, InstanceTypeConfig,
    JobFlowInstancesConfig, MarketType, OnDemandProvisioningAllocationStrategy,
    OnDemandProvisioningSpecification, ScriptBootstrapActionConfig, Step, StepConfig,
    StepSummary, Tag as AwsTag, VolumeSpecification,
};
use serde::Deserialize;
use tracing::info;

use crate::sketches::emr::{BootstrapScript, SecurityGroups, Tag};
use crate::spark::Configuration;

/// Capacity units one core node contributes to its fleet.
const CORE_FLEET_WEIGHT: i32 = 48;

/// A step to run on the cluster via command-runner.
#[derive(Debug, Clone)]
pub struct StepSpec {
    pub name: String,
    pub args: Vec<String>,
}

/// The dual-mode instance shape: a sketch may pin explicit instance groups
/// instead of the default weighted-fleet layout.
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceGroupsSpec {
    pub master: InstanceGroupSpec,
    pub core: InstanceGroupSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstanceGroupSpec {
    #[serde(rename = "Market")]
    pub market: String,
    #[serde(rename = "InstanceType")]
    pub instance_type: String,
    #[serde(rename = "InstanceCount")]
    pub instance_count: i32,
}

/// Everything `start_cluster` needs, resolved from the sketch plus CLI
/// overrides before the call.
#[derive(Debug, Clone)]
pub struct ClusterSpec {
    pub name: String,
    pub log_uri: String,
    pub keep_alive: bool,
    pub protect: bool,
    pub applications: Vec<String>,
    pub job_flow_role: String,
    pub service_role: String,
    pub release_label: String,
    pub master_instance: String,
    pub core_instance: String,
    pub node_count: u32,
    pub spot: bool,
    pub volume_size_gb: i32,
    pub subnets: Vec<String>,
    pub key_name: Option<String>,
    pub security_groups: SecurityGroups,
    pub tags: Vec<Tag>,
    pub configurations: Vec<Configuration>,
    pub bootstrap_scripts: Vec<BootstrapScript>,
    pub steps: Vec<StepSpec>,
    pub instance_groups: Option<InstanceGroupsSpec>,
}

pub struct Emr {
    client: aws_sdk_emr::Client,
}

impl Emr {
    pub async fn new(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;
        Emr {
            client: aws_sdk_emr::Client::new(&config),
        }
    }

    /// Runs a job flow: creates a cluster and queues the given steps to run
    /// as soon as it is ready. Returns the new cluster's id.
    pub async fn start_cluster(&self, spec: &ClusterSpec) -> Result<String> {
        let steps = spec
            .steps
            .iter()
            .map(|step| {
                Ok(StepConfig::builder()
                    .name(&step.name)
                    .action_on_failure(ActionOnFailure::Continue)
                    .hadoop_jar_step(
                        HadoopJarStepConfig::builder()
                            .jar("command-runner.jar")
                            .set_args(Some(step.args.clone()))
                            .build(),
                    )
                    .build())
            })
            .collect::<Result<Vec<_>>>()?;

        let bootstrap_actions = spec
            .bootstrap_scripts
            .iter()
            .map(|script| {
                Ok(BootstrapActionConfig::builder()
                    .name(&script.name)
                    .script_bootstrap_action(
                        ScriptBootstrapActionConfig::builder()
                            .path(&script.path)
                            .set_args(Some(script.args.clone()))
                            .build(),
                    )
                    .build())
            })
            .collect::<Result<Vec<_>>>()?;

        let applications = spec
            .applications
            .iter()
            .map(|application| Application::builder().name(application).build())
            .collect();

        let configurations = spec.configurations.iter().map(to_aws_configuration).collect();

        let tags = spec
            .tags
            .iter()
            .map(|tag| AwsTag::builder().key(&tag.key).value(&tag.value).build())
            .collect();

        let response = self
            .client
            .run_job_flow()
            .name(&spec.name)
            .log_uri(&spec.log_uri)
            .release_label(&spec.release_label)
            .instances(build_instances(spec)?)
            .set_steps(Some(steps))
            .set_bootstrap_actions(Some(bootstrap_actions))
            .set_applications(Some(applications))
            .job_flow_role(&spec.job_flow_role)
            .service_role(&spec.service_role)
            .visible_to_all_users(true)
            .set_configurations(Some(configurations))
            .set_tags(Some(tags))
            .send()
            .await
            .context("couldn't create cluster")?;

        let cluster_id = response
            .job_flow_id()
            .ok_or_else(|| anyhow!("no job flow id in response"))?
            .to_string();
        info!(%cluster_id, "created cluster");
        Ok(cluster_id)
    }

    /// Detailed information about a cluster.
    pub async fn describe_cluster(&self, cluster_id: &str) -> Result<Cluster> {
        let response = self
            .client
            .describe_cluster()
            .cluster_id(cluster_id)
            .send()
            .await
            .with_context(|| format!("couldn't get data for cluster {cluster_id}"))?;
        response
            .cluster()
            .cloned()
            .ok_or_else(|| anyhow!("no cluster in response"))
    }

    /// Bootstrap actions of a cluster (a separate API call; the cluster
    /// description does not carry them).
    pub async fn list_bootstrap_actions(&self, cluster_id: &str) -> Result<Vec<Command>> {
        let response = self
            .client
            .list_bootstrap_actions()
            .cluster_id(cluster_id)
            .send()
            .await
            .with_context(|| format!("couldn't get bootstrap actions for cluster {cluster_id}"))?;
        Ok(response.bootstrap_actions().to_vec())
    }

    /// Terminates a cluster. All instances are shut down and any data not
    /// saved elsewhere (e.g. to S3) is lost. Cannot be undone.
    pub async fn terminate_cluster(&self, cluster_id: &str) -> Result<()> {
        self.client
            .terminate_job_flows()
            .job_flow_ids(cluster_id)
            .send()
            .await
            .with_context(|| format!("couldn't terminate cluster {cluster_id}"))?;
        info!(cluster_id, "terminated cluster");
        Ok(())
    }

    /// Adds one command-runner step to a running cluster; returns its id.
    pub async fn add_step(&self, cluster_id: &str, name: &str, args: Vec<String>) -> Result<String> {
        let step = StepConfig::builder()
            .name(name)
            .action_on_failure(ActionOnFailure::Continue)
            .hadoop_jar_step(
                HadoopJarStepConfig::builder()
                    .jar("command-runner.jar")
                    .set_args(Some(args))
                    .build(),
            )
            .build();

        let response = self
            .client
            .add_job_flow_steps()
            .job_flow_id(cluster_id)
            .steps(step)
            .send()
            .await
            .with_context(|| format!("couldn't start step {name}"))?;

        let step_id = response
            .step_ids()
            .first()
            .cloned()
            .ok_or_else(|| anyhow!("no step id in response"))?;
        info!(%step_id, "started step");
        Ok(step_id)
    }

    /// Submits a Spark step running a JAR's main class.
    pub async fn add_spark_jar_step(
        &self,
        cluster_id: &str,
        name: &str,
        script_uri: &str,
        class: &str,
        script_args: &[String],
    ) -> Result<String> {
        self.add_step(cluster_id, name, spark_jar_step_args(class, script_uri, script_args))
            .await
    }

    /// Submits a Spark step running a Python application.
    pub async fn add_spark_python_step(
        &self,
        cluster_id: &str,
        name: &str,
        script_uri: &str,
        pyfiles: &[String],
        script_args: &[String],
    ) -> Result<String> {
        self.add_step(
            cluster_id,
            name,
            spark_python_step_args(script_uri, pyfiles, script_args),
        )
        .await
    }

    /// All steps of a cluster, completed and failed ones included.
    pub async fn list_steps(&self, cluster_id: &str) -> Result<Vec<StepSummary>> {
        let response = self
            .client
            .list_steps()
            .cluster_id(cluster_id)
            .send()
            .await
            .with_context(|| format!("couldn't get steps for cluster {cluster_id}"))?;
        Ok(response.steps().to_vec())
    }

    /// Detailed information about one step, including its current state.
    pub async fn describe_step(&self, cluster_id: &str, step_id: &str) -> Result<Step> {
        let response = self
            .client
            .describe_step()
            .cluster_id(cluster_id)
            .step_id(step_id)
            .send()
            .await
            .with_context(|| format!("couldn't get data for step {step_id}"))?;
        response
            .step()
            .cloned()
            .ok_or_else(|| anyhow!("no step in response"))
    }
}

/// spark-submit arguments for a JAR step.
pub fn spark_jar_step_args(class: &str, script_uri: &str, script_args: &[String]) -> Vec<String> {
    let mut args: Vec<String> = ["spark-submit", "--deploy-mode", "cluster", "--master", "yarn", "--class"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    args.push(class.to_string());
    args.push(script_uri.to_string());
    args.extend(script_args.iter().cloned());
    args
}

/// spark-submit arguments for a Python step.
// TODO: the --pyfiles flag is only attached when the list is empty, which
// looks inverted; confirm the intended spark-submit invocation before
// changing it.
pub fn spark_python_step_args(
    script_uri: &str,
    pyfiles: &[String],
    script_args: &[String],
) -> Vec<String> {
    let mut args: Vec<String> = ["spark-submit", "--deploy-mode", "cluster", "--master", "yarn"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    if pyfiles.is_empty() {
        args.push("--pyfiles".to_string());
        args.extend(pyfiles.iter().cloned());
    }
    args.push(script_uri.to_string());
    args.extend(script_args.iter().cloned());
    args
}

fn to_aws_configuration(configuration: &Configuration) -> AwsConfiguration {
    AwsConfiguration::builder()
        .classification(&configuration.classification)
        .set_properties(Some(
            configuration.properties.clone().into_iter().collect(),
        ))
        .build()
}

fn build_instances(spec: &ClusterSpec) -> Result<JobFlowInstancesConfig> {
    let mut builder = JobFlowInstancesConfig::builder()
        .keep_job_flow_alive_when_no_steps(spec.keep_alive)
        .termination_protected(spec.protect)
        .set_ec2_subnet_ids(Some(spec.subnets.clone()))
        .emr_managed_master_security_group(&spec.security_groups.emr_managed_master)
        .emr_managed_slave_security_group(&spec.security_groups.emr_managed_slave)
        .set_additional_master_security_groups(Some(
            spec.security_groups.additional_master.clone(),
        ))
        .set_additional_slave_security_groups(Some(spec.security_groups.additional_slave.clone()));

    if let Some(key_name) = &spec.key_name {
        builder = builder.ec2_key_name(key_name);
    }

    builder = match &spec.instance_groups {
        Some(groups) => builder.set_instance_groups(Some(build_instance_groups(groups)?)),
        None => builder.set_instance_fleets(Some(build_instance_fleets(spec)?)),
    };

    Ok(builder.build())
}

fn build_instance_groups(groups: &InstanceGroupsSpec) -> Result<Vec<InstanceGroupConfig>> {
    let master = InstanceGroupConfig::builder()
        .name("Master")
        .instance_role(InstanceRoleType::Master)
        .market(MarketType::from(groups.master.market.as_str()))
        .instance_type(&groups.master.instance_type)
        .instance_count(groups.master.instance_count)
        .build();
    let core = InstanceGroupConfig::builder()
        .name("Core")
        .instance_role(InstanceRoleType::Core)
        .market(MarketType::from(groups.core.market.as_str()))
        .instance_type(&groups.core.instance_type)
        .instance_count(groups.core.instance_count)
        .build();
    Ok(vec![master, core])
}

fn build_instance_fleets(spec: &ClusterSpec) -> Result<Vec<InstanceFleetConfig>> {
    let core_capacity = CORE_FLEET_WEIGHT * spec.node_count as i32;
    let master = InstanceFleetConfig::builder()
        .name("Master")
        .instance_fleet_type(InstanceFleetType::Master)
        .target_on_demand_capacity(1)
        .target_spot_capacity(0)
        .launch_specifications(on_demand_lowest_price()?)
        .instance_type_configs(fleet_instance_type(
            &spec.master_instance,
            1,
            spec.volume_size_gb,
            false,
        )?)
        .build();
    let core = InstanceFleetConfig::builder()
        .name("Core")
        .instance_fleet_type(InstanceFleetType::Core)
        .target_on_demand_capacity(if spec.spot { 0 } else { core_capacity })
        .target_spot_capacity(if spec.spot { core_capacity } else { 0 })
        .launch_specifications(on_demand_lowest_price()?)
        .instance_type_configs(fleet_instance_type(
            &spec.core_instance,
            CORE_FLEET_WEIGHT,
            spec.volume_size_gb,
            true,
        )?)
        .build();
    Ok(vec![master, core])
}

fn on_demand_lowest_price() -> Result<InstanceFleetProvisioningSpecifications> {
    Ok(InstanceFleetProvisioningSpecifications::builder()
        .on_demand_specification(
            OnDemandProvisioningSpecification::builder()
                .allocation_strategy(OnDemandProvisioningAllocationStrategy::LowestPrice)
                .build(),
        )
        .build())
}

fn fleet_instance_type(
    instance_type: &str,
    weighted_capacity: i32,
    volume_size_gb: i32,
    ebs_optimized: bool,
) -> Result<InstanceTypeConfig> {
    let mut ebs = EbsConfiguration::builder().ebs_block_device_configs(
        EbsBlockDeviceConfig::builder()
            .volume_specification(
                VolumeSpecification::builder()
                    .size_in_gb(volume_size_gb)
                    .volume_type("gp2")
                    .build(),
            )
            .volumes_per_instance(2)
            .build(),
    );
    if ebs_optimized {
        ebs = ebs.ebs_optimized(true);
    }
    Ok(InstanceTypeConfig::builder()
        .weighted_capacity(weighted_capacity)
        .ebs_configuration(ebs.build())
        .bid_price_as_percentage_of_on_demand_price(100.0)
        .instance_type(instance_type)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jar_step_args_order() {
        let args = spark_jar_step_args(
            "com.example.Main",
            "s3://bucket/app.jar",
            &["--input".to_string(), "s3://bucket/in".to_string()],
        );
        assert_eq!(
            args,
            vec![
                "spark-submit",
                "--deploy-mode",
                "cluster",
                "--master",
                "yarn",
                "--class",
                "com.example.Main",
                "s3://bucket/app.jar",
                "--input",
                "s3://bucket/in",
            ]
        );
    }

    #[test]
    fn python_step_args_without_pyfiles() {
        // Current behavior: the bare flag appears exactly when the list is
        // empty (see the TODO above spark_python_step_args).
        let args = spark_python_step_args("s3://bucket/job.py", &[], &[]);
        assert_eq!(
            args,
            vec![
                "spark-submit",
                "--deploy-mode",
                "cluster",
                "--master",
                "yarn",
                "--pyfiles",
                "s3://bucket/job.py",
            ]
        );
    }

    #[test]
    fn python_step_args_with_pyfiles() {
        let args = spark_python_step_args(
            "s3://bucket/job.py",
            &["s3://bucket/deps.zip".to_string()],
            &["2024-01-01".to_string()],
        );
        assert_eq!(
            args,
            vec![
                "spark-submit",
                "--deploy-mode",
                "cluster",
                "--master",
                "yarn",
                "s3://bucket/job.py",
                "2024-01-01",
            ]
        );
    }

    #[test]
    fn instance_groups_spec_deserializes_sketch_shape() {
        let value = serde_json::json!({
            "master": {"Market": "ON_DEMAND", "InstanceType": "m5.xlarge", "InstanceCount": 1},
            "core": {"Market": "SPOT", "InstanceType": "r5.xlarge", "InstanceCount": 4}
        });
        let groups: InstanceGroupsSpec = serde_json::from_value(value).unwrap();
        assert_eq!(groups.master.instance_type, "m5.xlarge");
        assert_eq!(groups.core.market, "SPOT");
        assert_eq!(groups.core.instance_count, 4);
    }

    #[test]
    fn fleet_capacity_scales_with_node_count() {
        let fleets = build_instance_fleets(&ClusterSpec {
            name: "test".to_string(),
            log_uri: "s3://logs".to_string(),
            keep_alive: true,
            protect: false,
            applications: vec![],
            job_flow_role: "IamInstanceProfile".to_string(),
            service_role: "EMR_DefaultRole".to_string(),
            release_label: "emr-6.3.0".to_string(),
            master_instance: "m5.xlarge".to_string(),
            core_instance: "m5.xlarge".to_string(),
            node_count: 3,
            spot: false,
            volume_size_gb: 100,
            subnets: vec![],
            key_name: None,
            security_groups: SecurityGroups::default(),
            tags: vec![],
            configurations: vec![],
            bootstrap_scripts: vec![],
            steps: vec![],
            instance_groups: None,
        })
        .unwrap();

        assert_eq!(fleets.len(), 2);
        assert_eq!(fleets[0].target_on_demand_capacity(), Some(1));
        assert_eq!(fleets[1].target_on_demand_capacity(), Some(144));
        assert_eq!(fleets[1].target_spot_capacity(), Some(0));
    }
}
