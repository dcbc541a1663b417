//! Test fixtures - artifact content shared by scenarios.

use std::fs;
use std::path::Path;

use cpisync::domain::entities::PackageDescriptor;
use cpisync::domain::value_objects::ArtifactType;

use super::FakeTenant;

pub const FLOW_MANIFEST: &str = "Manifest-Version: 1.0\n\
Bundle-SymbolicName: Orders_Replicate; singleton:=true\n\
Bundle-Name: Orders Replicate\n\
SAP-BundleType: IntegrationFlow\n\
Origin-Bundle-Name: Orders Replicate\n";

pub const FLOW_MODEL_PATH: &str =
    "src/main/resources/scenarioflows/integrationflow/Orders_Replicate.iflw";

pub const FLOW_MODEL: &str = "<bpmn2:definitions>\n  <ifl:property>\n    <key>scriptBundleId</key>\n    <value>Common_Scripts_DEV</value>\n  </ifl:property>\n</bpmn2:definitions>\n";

pub const FLOW_PARAMETERS_PATH: &str = "src/main/resources/parameters.prop";

pub const FLOW_PARAMETERS: &str = "#Fri Oct 16 09:12:44 UTC 2026\nReceiver_Host=orders.dev.example.com\n";

pub const SCRIPT_MANIFEST: &str = "Manifest-Version: 1.0\n\
Bundle-SymbolicName: Common_Scripts_DEV\n\
SAP-BundleType: ScriptCollection\n";

pub const VALUE_MAPPING_MANIFEST: &str = "Manifest-Version: 1.0\n\
Bundle-SymbolicName: Country_Codes\n\
SAP-BundleType: ValueMapping\n";

/// Tenant with one writable package holding a flow, a script collection
/// and a value mapping
pub fn orders_tenant() -> FakeTenant {
    FakeTenant::new()
        .package(PackageDescriptor::new("Orders", "Order Processing"))
        .artifact(
            ArtifactType::Integration,
            "Orders",
            "Orders_Replicate",
            "1.0.4",
            &[
                ("META-INF/MANIFEST.MF", FLOW_MANIFEST),
                (FLOW_MODEL_PATH, FLOW_MODEL),
                (FLOW_PARAMETERS_PATH, FLOW_PARAMETERS),
                ("metainfo.prop", "description=Replicates orders\n"),
            ],
        )
        .artifact(
            ArtifactType::ScriptCollection,
            "Orders",
            "Common_Scripts_DEV",
            "1.0.0",
            &[
                ("META-INF/MANIFEST.MF", SCRIPT_MANIFEST),
                ("src/main/resources/script/util.groovy", "def util() {}\n"),
            ],
        )
        .artifact(
            ArtifactType::ValueMapping,
            "Orders",
            "Country_Codes",
            "1.0.0",
            &[
                ("META-INF/MANIFEST.MF", VALUE_MAPPING_MANIFEST),
                ("value_mapping.xml", "<vm><row>DE</row></vm>\n"),
            ],
        )
        .configuration("Orders_Replicate", "Receiver_Host", "orders.dev.example.com")
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

pub fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
