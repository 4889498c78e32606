//! Tank pump controller firmware — main entry point.
//!
//! Hexagonal architecture around a single blocking control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                     │
//! │                                                            │
//! │  HardwareAdapter                          LogEventSink     │
//! │  (Input + Actuator + Display)             (EventSink)      │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ───────────────      │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │            ControlLoop (pure logic)              │      │
//! │  │  Sampler · Classifier · Sequencer                │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::{PinDriver, Pull};
use esp_idf_svc::hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_svc::hal::ledc::{LedcDriver, LedcTimerDriver, config::TimerConfig};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;
use log::{info, warn};

use tankpump::adapters::hardware::HardwareAdapter;
use tankpump::adapters::log_sink::LogEventSink;
use tankpump::app::control_loop::ControlLoop;
use tankpump::config::SystemConfig;
use tankpump::drivers::button::ButtonDriver;
use tankpump::drivers::buzzer::Buzzer;
use tankpump::drivers::display::TextDisplay;
use tankpump::drivers::hw_init;
use tankpump::drivers::pump::PumpDriver;
use tankpump::drivers::status_led::StatusLeds;
use tankpump::fsm::context::Button;
use tankpump::pins;
use tankpump::sensors::level::LevelSensor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  TankPump v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;
    match serde_json::to_string(&config) {
        Ok(json) => info!("Config: {}", json),
        Err(e) => warn!("Config dump failed: {}", e),
    }

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_adc(pins::LEVEL_ADC_CHANNEL)?;
    let peripherals = Peripherals::take()?;
    let io = peripherals.pins;

    let mut button_a = PinDriver::input(io.gpio5)?;
    button_a.set_pull(Pull::Up)?;
    let mut button_b = PinDriver::input(io.gpio6)?;
    button_b.set_pull(Pull::Up)?;

    let led_yellow = PinDriver::output(io.gpio11)?;
    let led_blue = PinDriver::output(io.gpio12)?;
    let led_red = PinDriver::output(io.gpio13)?;
    let pump_relay = PinDriver::output(io.gpio10)?;

    let buzzer_timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::new().frequency(config.buzzer_frequency_hz.Hz().into()),
    )?;
    let buzzer_pwm = LedcDriver::new(peripherals.ledc.channel0, &buzzer_timer, io.gpio21)?;

    let i2c = I2cDriver::new(
        peripherals.i2c0,
        io.gpio14,
        io.gpio15,
        &I2cConfig::new().baudrate(pins::I2C_BAUDRATE_HZ.Hz().into()),
    )?;
    let mut display = TextDisplay::new(i2c);
    if let Err(e) = display.init() {
        // Outputs still work without the panel.
        warn!("OLED init failed: {}, continuing headless", e);
    }

    // ── 4. Adapters ───────────────────────────────────────────
    let mut hw = HardwareAdapter::new(
        ButtonDriver::new(Button::A, button_a),
        ButtonDriver::new(Button::B, button_b),
        LevelSensor::new(pins::LEVEL_ADC_CHANNEL),
        StatusLeds::new(led_red, led_blue, led_yellow),
        PumpDriver::new(pump_relay),
        Buzzer::new(buzzer_pwm, config.buzzer_duty_percent),
        display,
    );
    let mut log_sink = LogEventSink::new();
    let mut delay = FreeRtos;

    info!(
        "GPIO: A={} B={} Y={} Bl={} R={} pump={} buzzer={} level=GPIO{} (ADC1 CH{}) I2C SDA={} SCL={}",
        pins::BUTTON_A_GPIO,
        pins::BUTTON_B_GPIO,
        pins::LED_YELLOW_GPIO,
        pins::LED_BLUE_GPIO,
        pins::LED_RED_GPIO,
        pins::PUMP_RELAY_GPIO,
        pins::BUZZER_GPIO,
        pins::LEVEL_ADC_GPIO,
        pins::LEVEL_ADC_CHANNEL,
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO,
    );

    // ── 5. Control loop ───────────────────────────────────────
    let mut control = ControlLoop::new(config);
    control.start(&mut hw, &mut log_sink);
    control.run(&mut hw, &mut delay, &mut log_sink)
}
