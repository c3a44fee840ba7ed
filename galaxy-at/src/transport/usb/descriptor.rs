// galaxy-at-rs/galaxy-at/src/transport/usb/descriptor.rs

use rusb::{Device, UsbContext};

/// USB class code for CDC communication interfaces (the ACM control side)
const CLASS_CDC: u8 = 0x02;

/// Inspect the device descriptors and return every `bConfigurationValue`
/// the device offers.
pub fn configuration_values<D: UsbContext>(device: &Device<D>) -> Vec<u8> {
    let count = match device.device_descriptor() {
        Ok(dd) => dd.num_configurations(),
        Err(_) => return Vec::new(),
    };

    (0..count)
        .filter_map(|index| device.config_descriptor(index).ok())
        .map(|config| config.number())
        .collect()
}

/// Whether configuration `value` carries a CDC interface, i.e. whether
/// switching to it will make a ttyACM node appear.
pub fn has_acm_interface<D: UsbContext>(device: &Device<D>, value: u8) -> bool {
    let count = match device.device_descriptor() {
        Ok(dd) => dd.num_configurations(),
        Err(_) => return false,
    };

    for index in 0..count {
        let Ok(config) = device.config_descriptor(index) else {
            continue;
        };
        if config.number() != value {
            continue;
        }
        for interface in config.interfaces() {
            for interface_desc in interface.descriptors() {
                if interface_desc.class_code() == CLASS_CDC {
                    return true;
                }
            }
        }
    }
    false
}
