//! Protocol constants
//!
//! Bitmasks and well-known UUIDs used as command arguments.

/// Server services, combined into the `SS` bitmask
pub mod service {
    pub const DEVICE_INFORMATION: u32 = 0x8000_0000;
    pub const BATTERY: u32 = 0x4000_0000;
    pub const HEART_RATE: u32 = 0x2000_0000;
    pub const HEALTH_THERMOMETER: u32 = 0x1000_0000;
    pub const GLUCOSE: u32 = 0x0800_0000;
    pub const BLOOD_PRESSURE: u32 = 0x0400_0000;
    pub const RUNNING_SPEED_CADENCE: u32 = 0x0200_0000;
    pub const CYCLING_SPEED_CADENCE: u32 = 0x0100_0000;
    pub const CURRENT_TIME: u32 = 0x0080_0000;
    pub const NEXT_DST_CHANGE: u32 = 0x0040_0000;
    pub const REFERENCE_TIME_UPDATE: u32 = 0x0020_0000;
    pub const LINK_LOSS: u32 = 0x0010_0000;
    pub const IMMEDIATE_ALERT: u32 = 0x0008_0000;
    pub const TX_POWER: u32 = 0x0004_0000;
    pub const ALERT_NOTIFICATION: u32 = 0x0002_0000;
    pub const PHONE_ALERT_STATUS: u32 = 0x0001_0000;
    pub const SCAN_PARAMETERS: u32 = 0x0000_4000;
    /// Private services declared with `PS`/`PC`
    pub const USER_DEFINED: u32 = 0x0000_0001;
}

/// Module features, combined into the `SR` bitmask
pub mod feature {
    pub const CENTRAL: u32 = 0x8000_0000;
    /// Report `RV` lines instead of answering reads from stored values
    pub const REAL_TIME_READ: u32 = 0x4000_0000;
    pub const AUTO_ADVERTISE: u32 = 0x2000_0000;
    pub const ENABLE_MLDP: u32 = 0x1000_0000;
    pub const AUTO_MLDP_DISABLE: u32 = 0x0800_0000;
    pub const NO_DIRECT_ADVERTISE: u32 = 0x0400_0000;
    pub const UART_FLOW_CONTROL: u32 = 0x0200_0000;
    pub const RUN_SCRIPT_PWR_ON: u32 = 0x0100_0000;
    pub const ENABLE_AUTH: u32 = 0x0040_0000;
    pub const ENABLE_REMOTE_CMD: u32 = 0x0020_0000;
    pub const DO_NOT_SAVE_BONDING: u32 = 0x0010_0000;
    /// IO capability field (3 bits)
    pub const IO_CAP: u32 = 0x00E0_0000;
    pub const BLOCK_SET_CMD: u32 = 0x0001_0000;
    pub const ENABLE_OTA: u32 = 0x0000_8000;
    pub const IOS_MODE: u32 = 0x0000_4000;
    pub const SERVER_ONLY: u32 = 0x0000_2000;
    pub const ENABLE_UART_SCRIPT: u32 = 0x0000_1000;
    pub const AUTO_MLDP: u32 = 0x0000_0800;
    pub const MLDP_WITHOUT_STATUS: u32 = 0x0000_0400;
}

/// Private characteristic property bits (`PC` second field)
pub mod property {
    pub const EXTENDED: u8 = 0b1000_0000;
    pub const AUTH_WRITE: u8 = 0b0100_0000;
    pub const INDICATE: u8 = 0b0010_0000;
    pub const NOTIFY: u8 = 0b0001_0000;
    pub const WRITE: u8 = 0b0000_1000;
    pub const WRITE_WITHOUT_RESPONSE: u8 = 0b0000_0100;
    pub const READ: u8 = 0b0000_0010;
    pub const BROADCAST: u8 = 0b0000_0001;
}

/// Private characteristic security bits (optional `PC` fourth field)
pub mod security {
    pub const NONE: u8 = 0b0000_0000;
    pub const ENCRYPTED_READ: u8 = 0b0000_0001;
    pub const AUTHENTICATED_READ: u8 = 0b0000_0010;
    pub const ENCRYPTED_WRITE: u8 = 0b0001_0000;
    pub const AUTHENTICATED_WRITE: u8 = 0b0010_0000;
}

/// SIG-assigned characteristic UUIDs served by the built-in services
pub mod uuid16 {
    pub const MANUFACTURER_NAME: u16 = 0x2A29;
    pub const MODEL_NUMBER: u16 = 0x2A24;
    pub const SERIAL_NUMBER: u16 = 0x2A25;
    pub const HARDWARE_REVISION: u16 = 0x2A27;
    pub const FIRMWARE_REVISION: u16 = 0x2A26;
    pub const SOFTWARE_REVISION: u16 = 0x2A28;
    pub const SYSTEM_ID: u16 = 0x2A23;
    pub const REG_CERT_DATA: u16 = 0x2A2A;
    pub const BATTERY_LEVEL: u16 = 0x2A19;
}

/// Highest value of the battery level characteristic (100 %)
pub const BATTERY_MAX_LEVEL: u8 = 0x64;
