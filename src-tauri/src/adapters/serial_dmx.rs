//! Serial DMX transport using the `serialport` crate
//!
//! The interface on the far end is a dumb USB-to-DMX converter: it takes
//! the raw 512-byte universe buffer at the DMX512 line rate and clocks it
//! onto the bus.

use std::io::Write;
use std::time::Duration;

use crate::domain::{CuedeckError, CuedeckResult, DmxPortInfo, DMX_BAUD};
use crate::ports::DmxTransport;

/// Read/write timeout on the DMX serial port
const PORT_TIMEOUT: Duration = Duration::from_millis(100);

/// An open serial connection to a DMX interface
pub struct SerialDmxTransport {
    port: Box<dyn serialport::SerialPort>,
    name: String,
}

impl SerialDmxTransport {
    /// List serial ports that may carry a DMX interface
    pub fn list_ports() -> CuedeckResult<Vec<DmxPortInfo>> {
        let ports = serialport::available_ports()
            .map_err(|e| CuedeckError::Dmx(format!("Failed to list ports: {e}")))?;

        Ok(ports
            .into_iter()
            .map(|p| {
                let port_type = match &p.port_type {
                    serialport::SerialPortType::UsbPort(info) => {
                        format!("USB ({:04X}:{:04X})", info.vid, info.pid)
                    }
                    serialport::SerialPortType::PciPort => "PCI".to_string(),
                    serialport::SerialPortType::BluetoothPort => "Bluetooth".to_string(),
                    serialport::SerialPortType::Unknown => "Native".to_string(),
                };
                DmxPortInfo {
                    name: p.port_name,
                    port_type,
                }
            })
            .collect())
    }

    /// Open a serial port at the DMX line rate
    pub fn open(port: &str) -> CuedeckResult<Self> {
        let serial = serialport::new(port, DMX_BAUD)
            .timeout(PORT_TIMEOUT)
            .open()
            .map_err(|e| CuedeckError::Dmx(format!("Failed to open {port}: {e}")))?;

        Ok(Self {
            port: serial,
            name: port.to_string(),
        })
    }
}

impl DmxTransport for SerialDmxTransport {
    fn write_frame(&mut self, frame: &[u8]) -> CuedeckResult<()> {
        self.port
            .write_all(frame)
            .map_err(|e| CuedeckError::Dmx(format!("Frame write failed: {e}")))
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
