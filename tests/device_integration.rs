// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the `Device` API and per-key state using the mock
//! transport.

use std::sync::Arc;

use litra_lib::command;
use litra_lib::manager::{ManagerConfig, RetryPolicy};
use litra_lib::state::{BackLightState, ColorPreset, Cycle, PowerToggle};
use litra_lib::transport::MockTransport;
use litra_lib::types::{LightTarget, RgbColor};
use litra_lib::{Device, Error, ValueError};

fn device(mock: &MockTransport) -> Device<MockTransport> {
    Device::from_transport(
        mock.clone(),
        ManagerConfig::new().with_retry(RetryPolicy::immediate()),
    )
}

// ============================================================================
// Semantic operations
// ============================================================================

mod operations {
    use super::*;

    #[tokio::test]
    async fn each_operation_writes_its_reports() {
        let mock = MockTransport::litra();
        let device = device(&mock);

        device.power(LightTarget::Back, true).await.unwrap();
        device.set_brightness(LightTarget::Back, 42).await.unwrap();
        device.set_temperature(6500).await.unwrap();
        device.set_color(RgbColor::new(1, 2, 3)).await.unwrap();
        device
            .set_gradient(RgbColor::white(), RgbColor::new(0, 0, 0))
            .await
            .unwrap();

        let written = mock.written();
        assert_eq!(written.len(), 1 + 1 + 1 + 8 + 8);
        assert_eq!(written[0], command::power(LightTarget::Back, true));
        assert_eq!(written[1], command::brightness(LightTarget::Back, 42).unwrap());
        assert_eq!(written[2], command::temperature(LightTarget::Front, 6500).unwrap());
        assert_eq!(
            &written[3..11],
            &command::solid_color(LightTarget::Back, RgbColor::new(1, 2, 3)).unwrap()[..]
        );
        assert_eq!(
            &written[11..],
            &command::gradient(RgbColor::white(), RgbColor::new(0, 0, 0))[..]
        );
        // One connection for every call
        assert_eq!(mock.open_calls(), 1);
    }

    #[tokio::test]
    async fn power_off_all_is_front_then_back() {
        let mock = MockTransport::litra();
        device(&mock).power_off_all().await.unwrap();

        assert_eq!(
            mock.written(),
            vec![
                command::power(LightTarget::Front, false),
                command::power(LightTarget::Back, false),
            ]
        );
    }

    #[tokio::test]
    async fn validation_errors_are_not_retried() {
        let mock = MockTransport::litra();
        let device = device(&mock);

        let err = device
            .set_brightness(LightTarget::Front, 101)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::OutOfRange {
                min: 1,
                max: 100,
                actual: 101
            })
        ));
        assert_eq!(mock.init_calls(), 0);
    }

    #[tokio::test]
    async fn transport_errors_surface_after_budget() {
        let mock = MockTransport::litra();
        mock.fail_next_writes(100);

        let err = device(&mock).set_temperature(4000).await.unwrap_err();
        assert!(matches!(err, Error::RetriesExhausted { attempts: 4, .. }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn shared_device_serves_concurrent_callers() {
        let mock = MockTransport::litra();
        let device = Arc::new(device(&mock));

        let tasks: Vec<_> = (1..=10u8)
            .map(|i| {
                let device = Arc::clone(&device);
                tokio::spawn(async move { device.set_brightness(LightTarget::Back, i * 10).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let mut levels: Vec<u8> = mock.written().iter().map(|c| c.payload()[1]).collect();
        levels.sort_unstable();
        assert_eq!(levels, (1..=10).map(|i| i * 10).collect::<Vec<u8>>());
    }
}

// ============================================================================
// Shutdown
// ============================================================================

mod shutdown {
    use super::*;

    #[tokio::test]
    async fn shutdown_switches_off_then_closes() {
        let mock = MockTransport::litra();
        let device = device(&mock);
        device.set_front(50, 4000).await.unwrap();
        mock.clear_written();

        device.shutdown().await;

        assert_eq!(
            mock.written(),
            vec![
                command::power(LightTarget::Front, false),
                command::power(LightTarget::Back, false),
            ]
        );
        assert_eq!(mock.open_handles(), 0);
        assert!(device.manager().state().await.is_closed());
    }

    #[tokio::test]
    async fn failed_power_off_still_closes() {
        let mock = MockTransport::new();
        let device = device(&mock);

        device.shutdown().await;

        assert!(device.is_shut_down());
        assert!(device.manager().state().await.is_closed());
        assert!(matches!(device.power_off_all().await, Err(Error::Closed)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_shutdowns_run_once() {
        let mock = MockTransport::litra();
        let device = Arc::new(device(&mock));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let device = Arc::clone(&device);
                tokio::spawn(async move { device.shutdown().await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(mock.written().len(), 2);
        assert_eq!(mock.release_calls(), 1);
    }

    #[tokio::test]
    async fn shutdown_waits_for_signal() {
        let mock = MockTransport::litra();
        let device = Arc::new(device(&mock));
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let waiter = {
            let device = Arc::clone(&device);
            tokio::spawn(async move {
                litra_lib::shutdown::shutdown_on(&*device, async {
                    let _ = rx.await;
                })
                .await;
            })
        };
        tokio::task::yield_now().await;
        assert!(!device.is_shut_down());
        assert!(mock.written().is_empty());

        tx.send(()).unwrap();
        waiter.await.unwrap();

        assert!(device.is_shut_down());
        assert_eq!(
            mock.written(),
            vec![
                command::power(LightTarget::Front, false),
                command::power(LightTarget::Back, false),
            ]
        );
    }

    #[tokio::test]
    async fn hook_can_be_aborted_before_signal() {
        let mock = MockTransport::litra();
        let device = Arc::new(device(&mock));

        let hook = litra_lib::shutdown::spawn_shutdown_hook(Arc::clone(&device));
        hook.abort();
        assert!(hook.await.unwrap_err().is_cancelled());

        assert!(!device.is_shut_down());
        device.power(LightTarget::Front, true).await.unwrap();
    }
}

// ============================================================================
// Per-key state driving the device
// ============================================================================

mod key_state {
    use super::*;

    #[tokio::test]
    async fn back_power_restores_last_preset() {
        let mock = MockTransport::litra();
        let device = device(&mock);
        let mut back = BackLightState::new();

        let preset = ColorPreset::gradient(RgbColor::red_color(), RgbColor::blue_color());
        back.remember(device.apply_preset(&preset).await.unwrap());

        device.write_batch(&back.toggle_commands()).await.unwrap();
        mock.clear_written();
        device.write_batch(&back.toggle_commands()).await.unwrap();

        let written = mock.written();
        assert_eq!(written[0], command::power(LightTarget::Back, true));
        assert_eq!(&written[1..], &preset.commands()[..]);
    }

    #[tokio::test]
    async fn color_cycle_from_settings() {
        let mock = MockTransport::litra();
        let device = device(&mock);
        let mut cycle: Cycle<RgbColor> =
            Cycle::from_json(r##"{"colorPresets": ["#112233", "#445566"], "cycleIndex": 1}"##)
                .unwrap();

        let (color, position) = cycle.advance().map(|(c, i)| (*c, i)).unwrap();
        assert_eq!(position, 2);
        device.apply_color(color).await.unwrap();

        assert_eq!(cycle.label(), "1/2");
        assert_eq!(&mock.written()[1].payload()[1..4], &[0x44, 0x55, 0x66]);
    }

    #[tokio::test]
    async fn preset_cycle_applies_each_mode() {
        let mock = MockTransport::litra();
        let device = device(&mock);
        let json = r##"{
            "presets": [
                {"mode": "solid", "color": "#00FF00"},
                {"mode": "gradient", "color": "#FF0000", "color2": "#0000FF"}
            ],
            "cycleIndex": 0
        }"##;
        let mut cycle: Cycle<ColorPreset> = Cycle::from_json(json).unwrap();

        for _ in 0..2 {
            let preset = *cycle.advance().unwrap().0;
            device.apply_preset(&preset).await.unwrap();
        }

        let written = mock.written();
        assert_eq!(written.len(), 18);
        assert_eq!(
            &written[10..],
            &command::gradient(RgbColor::red_color(), RgbColor::blue_color())[..]
        );
    }

    #[tokio::test]
    async fn front_toggle_and_temperature_cycle() {
        let mock = MockTransport::litra();
        let device = device(&mock);
        let mut toggle = PowerToggle::default();
        let mut temps = Cycle::front_temperatures();

        device
            .write_batch(&[toggle.toggle_command(LightTarget::Front)])
            .await
            .unwrap();
        let (kelvin, _) = temps.advance().unwrap();
        device.set_temperature(*kelvin).await.unwrap();

        let written = mock.written();
        assert_eq!(written[0], command::power(LightTarget::Front, true));
        assert_eq!(&written[1].payload()[..2], &[0x0A, 0x8C]);
    }
}
