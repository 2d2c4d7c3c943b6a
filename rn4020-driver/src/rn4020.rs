//! RN4020 driver
//!
//! [`Rn4020`] owns the line source and the protocol machine. Every command
//! operation frames its line, arms the machine, sends the line and then
//! pumps [`Rn4020::poll`] until the module answers or the configured
//! deadline passes. Notifications that arrive in between are handed to
//! the [`EventHandler`] right away, on the caller's stack.
//!
//! # Re-entrancy
//!
//! Handlers only receive the notification, never the driver, so a command
//! cannot be started from inside a callback. Drive the instance from a
//! single context.
//!
//! # Example
//!
//! ```ignore
//! let config = DriverConfig::default();
//! let mut wake = WakePins::from_config(wake_sw, wake_hw, delay, &config);
//! let mut ble = Rn4020::new(UartLineSource::new(uart), clock, app, config);
//! ble.setup(&mut wake)?;
//! ble.set_device_name("Sensor")?;
//! ble.reboot()?;
//! ble.advertise()?;
//! loop {
//!     ble.poll()?;
//! }
//! ```

use rn4020_core::{
    Dispatch, DriverConfig, EventHandler, HandleLookupItem, HandleTable, ProtocolMachine,
    ProtocolState, DEFAULT_TABLE_CAPACITY,
};
use rn4020_hal::{Clock, LineSource, PowerControl};
use rn4020_protocol::consts::{uuid16, BATTERY_MAX_LEVEL};
use rn4020_protocol::{Command, CommandError, Notification, Uuid, UUID128_LEN};

use crate::error::Error;

/// Result of a driver operation
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// RN4020 driver instance
///
/// `N` bounds the handle table built by
/// [`refresh_handle_table`](Self::refresh_handle_table).
pub struct Rn4020<S, C, H = (), const N: usize = DEFAULT_TABLE_CAPACITY> {
    source: S,
    clock: C,
    handler: H,
    config: DriverConfig,
    machine: ProtocolMachine<N>,
}

impl<S, C, H, const N: usize> Rn4020<S, C, H, N>
where
    S: LineSource,
    C: Clock,
    H: EventHandler,
{
    /// Create a driver
    ///
    /// The module is assumed unpowered; call [`setup`](Self::setup) before
    /// issuing commands.
    pub fn new(source: S, clock: C, handler: H, config: DriverConfig) -> Self {
        Self {
            source,
            clock,
            handler,
            config,
            machine: ProtocolMachine::new(),
        }
    }

    /// Current protocol state
    pub fn state(&self) -> ProtocolState {
        self.machine.state()
    }

    /// Whether a central is connected, as last reported by the module
    pub fn is_connected(&self) -> bool {
        self.machine.is_connected()
    }

    /// Handle table from the last refresh
    pub fn handle_table(&self) -> &HandleTable<N> {
        self.machine.table()
    }

    /// Table entry for a handle, if the last refresh reported it
    pub fn lookup_handle(&self, handle: u16) -> Option<&HandleLookupItem> {
        self.machine.table().lookup(handle)
    }

    /// Configuration this instance was created with
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Get a reference to the event handler
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Get a mutable reference to the event handler
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Give back the line source, clock and handler
    pub fn release(self) -> (S, C, H) {
        (self.source, self.clock, self.handler)
    }

    /// Process at most one incoming line
    ///
    /// Returns `Ok(None)` when no line was ready. Lines the machine rejects
    /// are logged and reported as [`Dispatch::Ignored`]; only transport
    /// failures are errors.
    pub fn poll(&mut self) -> Result<Option<Dispatch>, S::Error> {
        let Some(line) = self.source.try_read_line().map_err(Error::Transport)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(None);
        }
        trace!("rx: {}", line.as_str());

        let dispatch = match self.machine.advance(&line) {
            Ok(dispatch) => dispatch,
            Err(e) => {
                warn!("dropped line {}: {:?}", line.as_str(), e);
                return Ok(Some(Dispatch::Ignored));
            }
        };

        match &dispatch {
            Dispatch::Notification(notification) => self.notify(notification),
            Dispatch::Transition { from, to } => debug!("state {:?} -> {:?}", from, to),
            Dispatch::TableEntry(handle) => trace!("handle {:04X}", handle),
            Dispatch::ServiceEcho(_) => {}
            Dispatch::Ignored => warn!("unexpected line: {}", line.as_str()),
        }
        Ok(Some(dispatch))
    }

    /// Power the module up and wait for its command prompt
    ///
    /// Accepted in any state; this is also how an instance recovers after
    /// a [`Error::Timeout`].
    pub fn setup<P: PowerControl>(&mut self, power: &mut P) -> Result<(), S::Error> {
        info!("powering up module");
        self.machine.begin_power_up();
        self.source.clear();
        if let Err(e) = power.power_up() {
            error!("wake sequence failed: {:?}", crate::fmt::debug_value(&e));
            return Err(Error::Power);
        }
        self.machine.await_prompt()?;
        self.wait_for_ready()
    }

    /// Restore factory settings (`SF,1`)
    ///
    /// Takes effect after [`reboot`](Self::reboot).
    pub fn reset_to_factory_defaults(&mut self) -> Result<(), S::Error> {
        self.run(Command::FactoryReset)
    }

    /// Select server services, see [`rn4020_protocol::consts::service`]
    pub fn set_supported_services(&mut self, services: u32) -> Result<(), S::Error> {
        self.run(Command::SetServices(services))
    }

    /// Select features, see [`rn4020_protocol::consts::feature`]
    pub fn set_supported_features(&mut self, features: u32) -> Result<(), S::Error> {
        self.run(Command::SetFeatures(features))
    }

    pub fn set_device_name(&mut self, name: &str) -> Result<(), S::Error> {
        self.run(Command::SetName(name))
    }

    /// Set the device name; the module appends the last two MAC bytes
    pub fn set_device_name_with_mac(&mut self, name: &str) -> Result<(), S::Error> {
        self.run(Command::SetNameWithMac(name))
    }

    /// Reboot and wait for the fresh command prompt
    pub fn reboot(&mut self) -> Result<(), S::Error> {
        self.run(Command::Reboot)
    }

    pub fn advertise(&mut self) -> Result<(), S::Error> {
        self.run(Command::Advertise)
    }

    pub fn remove_bond(&mut self) -> Result<(), S::Error> {
        self.run(Command::RemoveBond)
    }

    /// Rebuild the handle table from the module's `LS` listing
    ///
    /// Fails with [`Error::TableOverflow`] if the module listed more
    /// handles than fit; the table then holds the first `N` of them and
    /// the machine is `Ready` again.
    pub fn refresh_handle_table(&mut self) -> Result<(), S::Error> {
        self.run(Command::ListHandles)?;
        if self.machine.take_overflow() {
            warn!(
                "handle table full at {} entries, rest dropped",
                self.machine.table().capacity()
            );
            return Err(Error::TableOverflow);
        }
        debug!("handle table has {} entries", self.machine.table().len());
        Ok(())
    }

    /// Remove all private services and characteristics
    pub fn clear_private(&mut self) -> Result<(), S::Error> {
        self.run(Command::ClearPrivate)
    }

    pub fn add_private_service(&mut self, uuid: &[u8; UUID128_LEN]) -> Result<(), S::Error> {
        self.run(Command::AddPrivateService(uuid))
    }

    /// Declare a characteristic in the last declared private service
    ///
    /// `security` of 0 sends no security field.
    pub fn add_private_characteristic(
        &mut self,
        uuid: &[u8; UUID128_LEN],
        properties: u8,
        size: u8,
        security: u8,
    ) -> Result<(), S::Error> {
        self.run(Command::AddPrivateCharacteristic {
            uuid,
            properties,
            size,
            security,
        })
    }

    /// Write a local characteristic by its 16-bit UUID
    pub fn write_public_characteristic(&mut self, uuid: u16, data: &[u8]) -> Result<(), S::Error> {
        self.run(Command::WriteByUuid {
            uuid: Uuid::Uuid16(uuid),
            payload: data,
        })
    }

    /// Write a local characteristic by its 128-bit UUID
    pub fn write_private_characteristic(
        &mut self,
        uuid: &[u8; UUID128_LEN],
        data: &[u8],
    ) -> Result<(), S::Error> {
        self.run(Command::WriteByUuid {
            uuid: Uuid::Uuid128(*uuid),
            payload: data,
        })
    }

    pub fn write_characteristic_handle(&mut self, handle: u16, data: &[u8]) -> Result<(), S::Error> {
        self.run(Command::WriteByHandle {
            handle,
            payload: data,
        })
    }

    /// Publish a battery level in percent through the Battery service
    pub fn set_battery_level(&mut self, level: u8) -> Result<(), S::Error> {
        if level > BATTERY_MAX_LEVEL {
            return Err(Error::Command(CommandError::ValueOutOfRange));
        }
        self.write_public_characteristic(uuid16::BATTERY_LEVEL, &[level])
    }

    /// Frame, arm, send and wait
    fn run(&mut self, command: Command<'_>) -> Result<(), S::Error> {
        let line = command.encode()?;
        self.machine.arm(command.expect())?;

        debug!("tx: {}", line.as_str());
        self.source.write_bytes(line.as_bytes()).map_err(Error::Transport)?;
        self.source.write_bytes(b"\n").map_err(Error::Transport)?;
        self.source.flush().map_err(Error::Transport)?;

        self.wait_for_ready()
    }

    fn wait_for_ready(&mut self) -> Result<(), S::Error> {
        let start = self.clock.now_ms();
        let timeout = u64::from(self.config.command_timeout_ms);
        loop {
            if self.machine.state().is_ready() {
                return Ok(());
            }
            if self.clock.now_ms().saturating_sub(start) > timeout {
                warn!("timeout in state {:?}", self.machine.state());
                return Err(Error::Timeout);
            }
            self.poll()?;
        }
    }

    fn notify(&mut self, notification: &Notification) {
        match notification {
            Notification::Connected => {
                info!("connected");
                self.handler.connection_changed(true);
            }
            Notification::ConnectionEnd => {
                info!("connection ended");
                self.handler.connection_changed(false);
            }
            Notification::RealTimeRead { handle } => {
                debug!("read request on {:04X}", handle);
                self.handler.real_time_read(*handle);
            }
            Notification::Write { handle, payload } => {
                debug!("write on {:04X}, {} bytes", handle, payload.len());
                self.handler.characteristic_written(*handle, payload);
            }
        }
    }
}
