//! Phone distraction alerts.
//!
//! An external object detector (camera + model) produces detection reports;
//! this module only decides when the "phone detected" alert turns on and
//! off. Inference itself is not done here.

mod monitor;

pub use monitor::{
    parse_report, Detection, DetectionReport, PhoneAlert, PhoneMonitor, DEFAULT_THRESHOLD,
    PHONE_LABEL,
};
