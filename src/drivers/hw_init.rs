//! One-shot ADC bring-up and raw level reads.
//!
//! GPIO, LEDC and I²C are owned through esp-idf-hal drivers in `main`;
//! the level channel goes through the ADC oneshot API directly via
//! ESP-IDF sys calls. [`init_adc`] is called once from `main()` before the
//! control loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::error::SensorError;
use crate::error::{Error, Result};

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// control-loop read path. `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

/// Create the ADC1 oneshot unit and configure `channel` for 12-bit reads.
#[cfg(target_os = "espidf")]
pub fn init_adc(channel: u32) -> Result<()> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(Error::Init("ADC1 unit init failed"));
    }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };
    // SAFETY: handle initialised just above; single-threaded boot path.
    let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) };
    if ret != ESP_OK as i32 {
        return Err(Error::Init("ADC1 channel config failed"));
    }

    info!("hw_init: ADC1 configured (CH{}=level, 12-bit)", channel);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_adc(_channel: u32) -> Result<()> {
    log::info!("hw_init(sim): ADC init skipped");
    Ok(())
}

/// Raw 12-bit conversion of an ADC1 channel configured by [`init_adc`].
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> core::result::Result<u16, SensorError> {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract, single-threaded control-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return Err(SensorError::AdcReadFailed);
    }
    Ok(raw.max(0) as u16)
}
