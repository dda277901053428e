//! The `emr` sketch item: everything a cluster start needs that is not
//! derived on the fly (roles, network placement, tags, bootstrap scripts,
//! stored configuration blocks, instance shape).

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::ec2;
use crate::emr::Emr;
use crate::sketches::item::SketchItem;
use crate::spark::Configuration;

pub const DEFAULT_JOB_FLOW_ROLE: &str = "IamInstanceProfile";
pub const DEFAULT_SERVICE_ROLE: &str = "EMR_DefaultRole";

/// One cluster tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// One bootstrap action: a script in S3 plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapScript {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Security groups assigned to the cluster's master and worker nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroups {
    #[serde(rename = "EmrManagedMasterSecurityGroup", default)]
    pub emr_managed_master: String,
    #[serde(rename = "EmrManagedSlaveSecurityGroup", default)]
    pub emr_managed_slave: String,
    #[serde(rename = "AdditionalMasterSecurityGroups", default)]
    pub additional_master: Vec<String>,
    #[serde(rename = "AdditionalSlaveSecurityGroups", default)]
    pub additional_slave: Vec<String>,
    #[serde(
        rename = "ServiceAccessSecurityGroup",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_access: Option<String>,
}

impl Default for SecurityGroups {
    fn default() -> Self {
        SecurityGroups {
            emr_managed_master: "TODO".to_string(),
            emr_managed_slave: "TODO".to_string(),
            additional_master: vec![],
            additional_slave: vec![],
            service_access: None,
        }
    }
}

/// Typed accessors over the `emr` item of a sketch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmrSketchItem {
    item: SketchItem,
}

impl EmrSketchItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Option<Self> {
        SketchItem::from_value(value).map(|item| EmrSketchItem { item })
    }

    pub fn into_value(self) -> Value {
        self.item.into_value()
    }

    pub fn to_value(&self) -> Value {
        self.item.to_value()
    }

    pub fn has_configuration(&self, name: &str) -> bool {
        self.item
            .has_in_list_dict("configurations", "Classification", name)
    }

    pub fn get_configuration(&self, name: &str) -> Option<Configuration> {
        self.item
            .get_in_list_dict("configurations", "Classification", name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn get_configurations(&self) -> Vec<Configuration> {
        self.item
            .get_list("configurations")
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()
    }

    pub fn remove_configuration(&mut self, name: &str) {
        self.item
            .remove_in_list_dict("configurations", "Classification", name);
    }

    /// Adds or replaces one configuration block.
    pub fn put_configuration(&mut self, configuration: &Configuration) {
        self.item.put_in_list_dict(
            "configurations",
            "Classification",
            json!({
                "Classification": configuration.classification,
                "Properties": configuration.properties,
            }),
        );
    }

    pub fn put_configurations(&mut self, configurations: &[Configuration]) {
        for configuration in configurations {
            self.put_configuration(configuration);
        }
    }

    pub fn has_bootstrap_script(&self, name: &str) -> bool {
        self.item.has_in_list_dict("bootstrap_scripts", "name", name)
    }

    pub fn remove_bootstrap_script(&mut self, name: &str) {
        self.item.remove_in_list_dict("bootstrap_scripts", "name", name);
    }

    pub fn put_bootstrap_script(&mut self, script: &BootstrapScript) {
        self.item.put_in_list_dict(
            "bootstrap_scripts",
            "name",
            json!({
                "name": script.name,
                "path": script.path,
                "args": script.args,
            }),
        );
    }

    pub fn get_bootstrap_scripts(&self) -> Vec<BootstrapScript> {
        self.item
            .get_list("bootstrap_scripts")
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()
    }

    pub fn get_bootstrap_script(&self, name: &str) -> Option<BootstrapScript> {
        self.item
            .get_in_list_dict("bootstrap_scripts", "name", name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn set_log_uri(&mut self, log_uri: &str) {
        self.item.put("log_uri", json!(log_uri));
    }

    pub fn get_log_uri(&self) -> Option<String> {
        self.string_field("log_uri")
    }

    pub fn has_subnet(&self, subnet: &str) -> bool {
        self.item.has_in_set("subnets", subnet)
    }

    pub fn remove_subnet(&mut self, subnet: &str) {
        self.item.remove_from_set("subnets", subnet);
    }

    pub fn put_subnet(&mut self, subnet: &str) {
        self.item.put_in_set("subnets", subnet);
    }

    pub fn get_subnets(&self) -> Vec<String> {
        self.item.get_string_list("subnets")
    }

    pub fn put_security_groups(&mut self, security_groups: &SecurityGroups) {
        self.item.put(
            "security_groups",
            serde_json::to_value(security_groups).expect("security groups serialize"),
        );
    }

    /// Security groups, or the placeholder structure when unset so a fresh
    /// item is usable before it is fully filled in.
    pub fn get_security_groups(&self) -> SecurityGroups {
        self.item
            .get("security_groups")
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default()
    }

    pub fn set_job_flow_role(&mut self, job_flow_role: &str) {
        self.item.put("job_flow_role", json!(job_flow_role));
    }

    pub fn get_job_flow_role(&self) -> String {
        self.string_field("job_flow_role")
            .unwrap_or_else(|| DEFAULT_JOB_FLOW_ROLE.to_string())
    }

    pub fn set_service_role(&mut self, service_role: &str) {
        self.item.put("service_role", json!(service_role));
    }

    pub fn get_service_role(&self) -> String {
        self.string_field("service_role")
            .unwrap_or_else(|| DEFAULT_SERVICE_ROLE.to_string())
    }

    pub fn set_keyname(&mut self, keyname: &str) {
        self.item.put("keyname", json!(keyname));
    }

    pub fn get_keyname(&self) -> Option<String> {
        self.string_field("keyname")
    }

    pub fn set_region(&mut self, region: &str) {
        self.item.put("region", json!(region));
    }

    pub fn get_region(&self) -> Option<String> {
        self.string_field("region")
    }

    pub fn put_tags(&mut self, tags: &[Tag]) {
        for tag in tags {
            self.item.put_in_list_dict(
                "tags",
                "Key",
                json!({"Key": tag.key, "Value": tag.value}),
            );
        }
    }

    pub fn get_tags(&self) -> Vec<Tag> {
        self.item
            .get_list("tags")
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()
    }

    pub fn put_instance_fleet(
        &mut self,
        name: &str,
        master_capacity: u32,
        core_capacity: u32,
        spot: bool,
    ) {
        self.item.put(
            "instance_fleet",
            json!({
                "master": {
                    "instance_fleet_name": name,
                    "TargetOnDemandCapacity": master_capacity,
                    "TargetSpotCapacity": 0,
                    "on_demand_allocation_strategy": "LOWEST_PRICE"
                },
                "core": {
                    "instance_fleet_name": name,
                    "TargetOnDemandCapacity": if spot { 0 } else { core_capacity },
                    "TargetSpotCapacity": if spot { core_capacity } else { 0 },
                    "on_demand_allocation_strategy": "LOWEST_PRICE"
                }
            }),
        );
    }

    pub fn get_instance_fleet(&self) -> Option<Value> {
        self.item.get("instance_fleet").cloned()
    }

    pub fn get_instance_fleets(&self) -> Option<Value> {
        self.item.get("instance_fleets").cloned()
    }

    pub fn put_instance_groups(
        &mut self,
        master_instance: &str,
        core_instance: &str,
        count: u32,
        spot: bool,
    ) {
        self.item.put(
            "instance_groups",
            json!({
                "master": {
                    "Market": "ON_DEMAND",
                    "InstanceType": master_instance,
                    "InstanceCount": 1
                },
                "core": {
                    "Market": if spot { "SPOT" } else { "ON_DEMAND" },
                    "InstanceType": core_instance,
                    "InstanceCount": count
                }
            }),
        );
    }

    pub fn get_instance_groups(&self) -> Option<Value> {
        self.item.get("instance_groups").cloned()
    }

    pub fn set_emr_label(&mut self, emr_label: &str) {
        self.item.put("emr_label", json!(emr_label));
    }

    pub fn get_emr_label(&self) -> Option<String> {
        self.string_field("emr_label")
    }

    pub fn set_cluster_name(&mut self, name: &str) {
        self.item.put("cluster_name", json!(name));
    }

    pub fn get_cluster_name(&self) -> Option<String> {
        self.string_field("cluster_name")
    }

    pub fn set_applications(&mut self, applications: &[String]) {
        self.item.put("applications", json!(applications));
    }

    pub fn get_applications(&self) -> Option<Vec<String>> {
        self.item
            .get("applications")
            .map(|_| self.item.get_string_list("applications"))
    }

    pub fn set_protect(&mut self, protect: bool) {
        self.item.put("TerminationProtected", json!(protect));
    }

    pub fn get_protect(&self) -> Option<bool> {
        self.item.get("TerminationProtected").and_then(Value::as_bool)
    }

    pub fn set_master_size_gb(&mut self, size: u32) {
        self.item.put("master_size_gb", json!(size));
    }

    pub fn get_master_size_gb(&self) -> Option<u32> {
        self.u32_field("master_size_gb")
    }

    pub fn set_core_size_gb(&mut self, size: u32) {
        self.item.put("core_size_gb", json!(size));
    }

    pub fn get_core_size_gb(&self) -> Option<u32> {
        self.u32_field("core_size_gb")
    }

    /// Default item document: role and security-group placeholders plus the
    /// weighted instance-fleet catalog, ready to be filled in by hand.
    pub fn generate() -> Value {
        json!({
            "job_flow_role": DEFAULT_JOB_FLOW_ROLE,
            "service_role": DEFAULT_SERVICE_ROLE,
            "security_groups": SecurityGroups::default(),
            "instance_fleets": generate_instance_fleets(),
        })
    }

    /// Builds an item from a running cluster's description: a point-in-time
    /// snapshot, not a live binding. Collaborator failures are propagated
    /// unchanged.
    pub async fn from_cluster(emr: &Emr, cluster_id: &str) -> anyhow::Result<Self> {
        let cluster = emr.describe_cluster(cluster_id).await?;
        let mut item = EmrSketchItem::new();

        for action in emr.list_bootstrap_actions(cluster_id).await? {
            item.put_bootstrap_script(&BootstrapScript {
                name: action.name().unwrap_or_default().to_string(),
                path: action.script_path().unwrap_or_default().to_string(),
                args: action.args().to_vec(),
            });
        }

        if let Some(attributes) = cluster.ec2_instance_attributes() {
            let requested = attributes.requested_ec2_subnet_ids();
            if requested.is_empty() {
                if let Some(subnet) = attributes.ec2_subnet_id() {
                    item.put_subnet(subnet);
                }
            } else {
                for subnet in requested {
                    item.put_subnet(subnet);
                }
            }

            item.put_security_groups(&SecurityGroups {
                emr_managed_master: attributes
                    .emr_managed_master_security_group()
                    .unwrap_or_default()
                    .to_string(),
                emr_managed_slave: attributes
                    .emr_managed_slave_security_group()
                    .unwrap_or_default()
                    .to_string(),
                additional_master: attributes.additional_master_security_groups().to_vec(),
                additional_slave: attributes.additional_slave_security_groups().to_vec(),
                service_access: attributes
                    .service_access_security_group()
                    .map(str::to_string),
            });

            if let Some(role) = attributes.iam_instance_profile() {
                item.set_job_flow_role(role);
            }
            if let Some(keyname) = attributes.ec2_key_name() {
                item.set_keyname(keyname);
            }
        }

        if let Some(log_uri) = cluster.log_uri() {
            item.set_log_uri(log_uri);
        }

        let configurations: Vec<Configuration> = cluster
            .configurations()
            .iter()
            .map(|configuration| Configuration {
                classification: configuration.classification().unwrap_or_default().to_string(),
                properties: configuration
                    .properties()
                    .map(|properties| {
                        properties
                            .iter()
                            .map(|(k, v)| (k.clone(), v.clone()))
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();
        item.put_configurations(&configurations);

        let tags: Vec<Tag> = cluster
            .tags()
            .iter()
            .map(|tag| Tag {
                key: tag.key().unwrap_or_default().to_string(),
                value: tag.value().unwrap_or_default().to_string(),
            })
            .collect();
        item.put_tags(&tags);

        Ok(item)
    }

    fn string_field(&self, key: &str) -> Option<String> {
        self.item.get(key).and_then(Value::as_str).map(str::to_string)
    }

    fn u32_field(&self, key: &str) -> Option<u32> {
        self.item.get(key).and_then(Value::as_u64).map(|v| v as u32)
    }
}

/// Groups the instance catalog into named weighted fleets, one per
/// memory-to-cpu ratio, with `ssd;`/`ebs;` variants split by local storage.
/// The weight approximates capacity units of 4 vCPUs or 32 GiB.
fn generate_instance_fleets() -> Value {
    let mut fleets: Map<String, Value> = Map::new();
    for (instance_type, attributes) in ec2::all() {
        let ratio = (attributes.memory / f64::from(attributes.cpu) * 100.0).round() / 100.0;
        let name = format!("mem/cpu={}", format_ratio(ratio));
        let weight =
            (f64::from(attributes.cpu) / 4.0).max(attributes.memory / 32.0).trunc() as i64;
        if weight > 0 {
            let value = json!({
                "InstanceType": instance_type,
                "WeightedCapacity": weight,
            });
            let storage_prefix = if attributes.storage > 0.0 { "ssd;" } else { "ebs;" };
            push_fleet(&mut fleets, &format!("{storage_prefix}{name}"), value.clone());
            push_fleet(&mut fleets, &name, value);
        }
    }
    Value::Object(fleets)
}

fn push_fleet(fleets: &mut Map<String, Value>, name: &str, value: Value) {
    fleets
        .entry(name.to_string())
        .or_insert_with(|| Value::Array(vec![]))
        .as_array_mut()
        .expect("fleet entries are arrays")
        .push(value);
}

fn format_ratio(ratio: f64) -> String {
    if ratio.fract() == 0.0 {
        format!("{ratio:.1}")
    } else {
        format!("{ratio}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn roles_fall_back_to_placeholder_defaults() {
        let item = EmrSketchItem::new();
        assert_eq!(item.get_job_flow_role(), "IamInstanceProfile");
        assert_eq!(item.get_service_role(), "EMR_DefaultRole");
        assert_eq!(item.get_security_groups(), SecurityGroups::default());
        assert_eq!(item.get_log_uri(), None);
    }

    #[test]
    fn put_configuration_replaces_by_classification() {
        let mut item = EmrSketchItem::new();
        let mut properties = BTreeMap::new();
        properties.insert("dfs.replication".to_string(), "2".to_string());
        item.put_configuration(&Configuration {
            classification: "hdfs-site".to_string(),
            properties: properties.clone(),
        });

        properties.insert("dfs.replication".to_string(), "3".to_string());
        item.put_configuration(&Configuration {
            classification: "hdfs-site".to_string(),
            properties,
        });

        let configurations = item.get_configurations();
        assert_eq!(configurations.len(), 1);
        assert_eq!(configurations[0].properties["dfs.replication"], "3");
        assert!(item.has_configuration("hdfs-site"));
        assert!(!item.has_configuration("spark"));
    }

    #[test]
    fn tags_deduplicate_by_key() {
        let mut item = EmrSketchItem::new();
        item.put_tags(&[
            Tag { key: "team".into(), value: "data".into() },
            Tag { key: "env".into(), value: "dev".into() },
        ]);
        item.put_tags(&[Tag { key: "team".into(), value: "ml".into() }]);

        let tags = item.get_tags();
        assert_eq!(tags.len(), 2);
        assert!(tags.iter().any(|t| t.key == "team" && t.value == "ml"));
    }

    #[test]
    fn subnets_behave_as_a_set() {
        let mut item = EmrSketchItem::new();
        item.put_subnet("subnet-1");
        item.put_subnet("subnet-2");
        item.put_subnet("subnet-1");
        assert_eq!(item.get_subnets(), vec!["subnet-2", "subnet-1"]);
        assert!(item.has_subnet("subnet-1"));
        item.remove_subnet("subnet-1");
        assert!(!item.has_subnet("subnet-1"));
    }

    #[test]
    fn instance_groups_encode_spot_market() {
        let mut item = EmrSketchItem::new();
        item.put_instance_groups("m5.xlarge", "r5.xlarge", 4, true);
        let groups = item.get_instance_groups().unwrap();
        assert_eq!(groups["master"]["Market"], "ON_DEMAND");
        assert_eq!(groups["master"]["InstanceCount"], 1);
        assert_eq!(groups["core"]["Market"], "SPOT");
        assert_eq!(groups["core"]["InstanceType"], "r5.xlarge");
        assert_eq!(groups["core"]["InstanceCount"], 4);
    }

    #[test]
    fn generated_item_is_immediately_usable() {
        let value = EmrSketchItem::generate();
        let item = EmrSketchItem::from_value(value).unwrap();
        assert_eq!(item.get_job_flow_role(), "IamInstanceProfile");
        assert_eq!(item.get_service_role(), "EMR_DefaultRole");
        assert!(item.get_instance_fleets().is_some());
    }

    #[test]
    fn generated_fleets_group_by_mem_cpu_ratio() {
        let fleets = generate_instance_fleets();
        // m5.xlarge: 16 GiB / 4 vCPU, EBS only, weight 1.
        let fleet = fleets["mem/cpu=4.0"].as_array().unwrap();
        assert!(fleet
            .iter()
            .any(|entry| entry["InstanceType"] == "m5.xlarge"));
        assert!(fleets.get("ebs;mem/cpu=4.0").is_some());
        // Types below one capacity unit (e.g. t3.nano) are skipped entirely.
        assert!(!fleets
            .as_object()
            .unwrap()
            .values()
            .flat_map(|v| v.as_array().unwrap())
            .any(|entry| entry["InstanceType"] == "t3.nano"));
    }
}
