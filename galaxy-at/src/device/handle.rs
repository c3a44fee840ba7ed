// galaxy-at-rs/galaxy-at/src/device/handle.rs

use std::marker::PhantomData;

use crate::config::SessionConfig;
use crate::device::mode_switch::{locate, reconfigure};
use crate::device::port::wait_for_port_with;
use crate::info::{self, DeviceInfo, PhonebookEntry};
use crate::protocol::{AtCommand, AtResponse, AtSession, crsm};
use crate::sim::{self, DecodedEf, Iccid};
use crate::transport::{PortConnector, UsbBus};
use crate::types::FileId;
use crate::utils::{CancelToken, Progress, WaitContext};
use crate::{Error, Result};

/// Type-state markers
pub struct Disconnected;
pub struct Ready;

/// Handset handle. Commands are only available once `connect` has put the
/// phone in modem mode and the AT handshake has succeeded.
pub struct Modem<State = Disconnected> {
    config: SessionConfig,
    bus: Box<dyn UsbBus>,
    session: AtSession,
    ctx: WaitContext,
    _state: PhantomData<State>,
}

impl<State> Modem<State> {
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Token that aborts any wait in progress when cancelled, e.g. from a
    /// signal handler.
    pub fn cancel_token(&self) -> CancelToken {
        self.ctx.cancel.clone()
    }

    fn into_state<Next>(self) -> Modem<Next> {
        Modem {
            config: self.config,
            bus: self.bus,
            session: self.session,
            ctx: self.ctx,
            _state: PhantomData,
        }
    }
}

impl Modem<Disconnected> {
    pub fn new(
        config: SessionConfig,
        bus: Box<dyn UsbBus>,
        connector: Box<dyn PortConnector>,
        cancel: CancelToken,
    ) -> Self {
        let progress = if config.show_progress {
            Progress::visible()
        } else {
            Progress::hidden()
        };
        let session = AtSession::new(connector).with_trace_io(config.trace_io);
        Self {
            config,
            bus,
            session,
            ctx: WaitContext::new(cancel, progress),
            _state: PhantomData,
        }
    }

    /// Bring the AT interface up.
    ///
    /// Each cycle runs the USB mode switch (skipped while the serial node
    /// is already there) and then the AT handshake. A handshake that gives
    /// up means the link dropped under us, so the next cycle redoes the
    /// switch unconditionally. Cycles are bounded by `config.connect`.
    pub fn connect(self) -> Result<Modem<Ready>> {
        let mut this = self;
        let policy = this.config.connect;
        let mut force_switch = false;
        let mut last_err = None;

        for cycle in policy.attempts() {
            this.ctx.cancel.check()?;
            this.switch_usb(force_switch)?;

            match this.session.handshake(&this.config.handshake, &mut this.ctx) {
                Ok(()) => {
                    this.enable_verbose_errors();
                    return Ok(this.into_state());
                }
                Err(e @ Error::HandshakeFailed { .. }) => {
                    log::warn!("connect cycle {} failed: {}", cycle, e);
                    last_err = Some(e);
                    force_switch = true;
                }
                Err(e) => return Err(e),
            }

            if cycle < policy.max_attempts() {
                policy.pause(&this.ctx.cancel)?;
            }
        }

        Err(last_err.unwrap_or(Error::HandshakeFailed {
            attempts: 0,
            failures: 0,
        }))
    }

    fn switch_usb(&mut self, force: bool) -> Result<()> {
        if !force && self.session.connector().port_present() {
            log::info!("serial device already present, skipping USB config switch");
            return Ok(());
        }

        let mut device = locate(
            &mut *self.bus,
            self.config.device,
            &self.config.locate,
            &mut self.ctx,
        )?;
        match device.identity() {
            Ok(ident) => log::debug!(
                "{} running configuration {:#x}",
                ident.id,
                ident.configuration
            ),
            Err(e) => log::debug!("could not query device identity: {}", e),
        }
        reconfigure(
            &mut *device,
            self.config.target_configuration,
            &self.config.reconfigure,
            &mut self.ctx,
        )?;
        drop(device);

        let connector = self.session.connector();
        let present = wait_for_port_with(
            connector.path(),
            &self.config.port_wait,
            &mut self.ctx,
            |_| connector.port_present(),
        )?;
        if !present {
            return Err(Error::PortUnavailable {
                path: connector.path().to_path_buf(),
                attempts: self.config.port_wait.max_attempts(),
            });
        }
        Ok(())
    }

    /// `+CMEE=2` makes the phone report errors as text. Not every firmware
    /// accepts it, so failure is only logged.
    fn enable_verbose_errors(&mut self) {
        match self.session.send(&AtCommand::verbose_errors()) {
            Ok(resp) if resp.is_ok() => log::debug!("verbose errors enabled"),
            Ok(resp) => log::warn!("+CMEE=2 not accepted: {:?}", resp.text()),
            Err(e) => log::warn!("+CMEE=2 failed: {}", e),
        }
    }
}

impl Modem<Ready> {
    /// Send a command and return whatever came back.
    pub fn send(&mut self, cmd: &AtCommand) -> Result<AtResponse> {
        self.session.send(cmd)
    }

    /// Send a command and require an `OK`.
    pub fn execute(&mut self, cmd: &AtCommand) -> Result<AtResponse> {
        self.session.execute(cmd)
    }

    /// Contents of `file` as hex.
    pub fn read_ef(&mut self, file: FileId) -> Result<String> {
        crsm::read_ef(&mut self.session, file, &self.config.crsm, &self.ctx.cancel)
    }

    /// Read `file` and decode it with its table layout.
    pub fn decode_ef(&mut self, file: FileId) -> Result<DecodedEf> {
        let payload = self.read_ef(file)?;
        sim::decode_file(file, &payload)
    }

    pub fn dump_network_info(&mut self) -> Result<Vec<DecodedEf>> {
        sim::dump_network_info(&mut self.session, &self.config.crsm, &self.ctx.cancel)
    }

    pub fn read_iccid(&mut self) -> Result<Iccid> {
        sim::read_iccid(&mut self.session, &self.config.crsm, &self.ctx.cancel)
    }

    pub fn phonebook(&mut self) -> Result<Vec<PhonebookEntry>> {
        info::read_phonebook(&mut self.session)
    }

    pub fn device_info(&mut self) -> Result<DeviceInfo> {
        info::read_device_info(&mut self.session)
    }

    /// Run the connect cycle again, e.g. after the phone dropped out of
    /// modem mode mid-session.
    pub fn reconnect(self) -> Result<Modem<Ready>> {
        self.disconnect().connect()
    }

    pub fn disconnect(self) -> Modem<Disconnected> {
        self.into_state()
    }
}
