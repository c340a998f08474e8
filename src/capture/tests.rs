// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::domain::media::RawImage;
use crate::error::Error;
use crate::infrastructure::{AccessBehavior, CameraProbe, StillCamera};
use std::sync::{Arc, Mutex};

fn service_with(behavior: AccessBehavior) -> (CameraCaptureService, CameraProbe) {
    let camera = StillCamera::test_pattern(6, 4).with_behavior(behavior);
    let probe = camera.probe();
    (CameraCaptureService::new(Box::new(camera)), probe)
}

#[derive(Clone, Default)]
struct RecordingSink {
    frames: Arc<Mutex<Vec<(u32, u32)>>>,
}

impl PreviewSink for RecordingSink {
    fn present(&mut self, frame: &RawImage) {
        self.frames
            .lock()
            .expect("sink lock")
            .push((frame.width(), frame.height()));
    }
}

#[test]
fn granted_start_is_active() {
    let (mut service, probe) = service_with(AccessBehavior::Grant);
    assert_eq!(service.start(), Ok(StartStatus::Active));
    assert!(service.is_active());
    assert!(!service.is_pending());
    assert_eq!(probe.live_streams(), 1);
}

#[test]
fn denied_start_leaves_service_inactive() {
    let (mut service, probe) = service_with(AccessBehavior::Deny);
    assert_eq!(service.start(), Err(CameraError::PermissionDenied));
    assert!(!service.is_active());
    assert!(!service.is_pending());
    assert_eq!(probe.granted(), 0);
}

#[test]
fn missing_device_reports_unavailable() {
    let (mut service, _) = service_with(AccessBehavior::Absent);
    assert_eq!(service.start(), Err(CameraError::DeviceUnavailable));
    assert!(!service.is_active());
}

#[test]
fn stop_is_idempotent_in_every_state() {
    let (mut service, probe) = service_with(AccessBehavior::Grant);

    // never started
    service.stop();
    service.stop();
    assert!(!service.is_active());

    service.start().expect("start");
    service.stop();
    service.stop();
    assert!(!service.is_active());
    assert_eq!(probe.stopped(), 1);
    assert_eq!(probe.live_streams(), 0);

    // restart after stop works
    assert_eq!(service.start(), Ok(StartStatus::Active));
    assert_eq!(probe.live_streams(), 1);
}

#[test]
fn restarting_stops_the_previous_stream_first() {
    let (mut service, probe) = service_with(AccessBehavior::Grant);
    service.start().expect("first");
    service.start().expect("second");
    assert_eq!(probe.granted(), 2);
    assert_eq!(probe.stopped(), 1);
    assert_eq!(probe.live_streams(), 1);
}

#[test]
fn capture_without_session_fails() {
    let (mut service, _) = service_with(AccessBehavior::Grant);
    let err = service
        .capture_frame(ExportFormat::Png)
        .expect_err("no session");
    assert!(matches!(err, Error::Camera(CameraError::NoActiveSession)));
}

#[test]
fn capture_encodes_the_frame_and_releases_the_camera() {
    let (mut service, probe) = service_with(AccessBehavior::Grant);
    service.start().expect("start");

    let still = service.capture_frame(ExportFormat::Png).expect("capture");
    let decoded = export::decode(still.bytes()).expect("decodable");
    assert_eq!(decoded.dimensions(), (6, 4));

    assert!(!service.is_active());
    assert_eq!(probe.live_streams(), 0);

    let err = service
        .capture_frame(ExportFormat::Png)
        .expect_err("already released");
    assert!(matches!(err, Error::Camera(CameraError::NoActiveSession)));
}

#[test]
fn deferred_prompt_resolves_on_poll() {
    let camera = StillCamera::test_pattern(4, 4).with_behavior(AccessBehavior::Defer);
    let handle = camera.prompt_handle();
    let mut service = CameraCaptureService::new(Box::new(camera));

    assert_eq!(service.start(), Ok(StartStatus::Pending));
    assert!(service.is_pending());
    assert!(!service.is_active());
    assert_eq!(service.poll(), None);

    assert!(handle.grant());
    assert_eq!(service.poll(), Some(Ok(())));
    assert!(service.is_active());
    assert_eq!(service.poll(), None);
}

#[test]
fn deferred_denial_surfaces_on_poll() {
    let camera = StillCamera::test_pattern(4, 4).with_behavior(AccessBehavior::Defer);
    let handle = camera.prompt_handle();
    let mut service = CameraCaptureService::new(Box::new(camera));

    service.start().expect("pending");
    assert!(handle.deny(CameraError::PermissionDenied));
    assert_eq!(service.poll(), Some(Err(CameraError::PermissionDenied)));
    assert!(!service.is_active());
    assert!(!service.is_pending());
}

#[test]
fn late_grant_after_stop_does_not_leak_a_stream() {
    let camera = StillCamera::test_pattern(4, 4).with_behavior(AccessBehavior::Defer);
    let handle = camera.prompt_handle();
    let probe = camera.probe();
    let mut service = CameraCaptureService::new(Box::new(camera));

    service.start().expect("pending");
    service.stop();
    assert!(!service.is_pending());

    assert!(handle.grant());
    assert_eq!(probe.granted(), 1);
    assert_eq!(probe.live_streams(), 0);
    assert_eq!(service.poll(), None);
    assert!(!service.is_active());
}

#[test]
fn late_grant_after_drop_does_not_leak_a_stream() {
    let camera = StillCamera::test_pattern(4, 4).with_behavior(AccessBehavior::Defer);
    let handle = camera.prompt_handle();
    let probe = camera.probe();
    let mut service = CameraCaptureService::new(Box::new(camera));
    service.start().expect("pending");
    drop(service);

    assert!(handle.grant());
    assert_eq!(probe.live_streams(), 0);
}

#[test]
fn dropping_the_service_stops_the_stream() {
    let (mut service, probe) = service_with(AccessBehavior::Grant);
    service.start().expect("start");
    drop(service);
    assert_eq!(probe.live_streams(), 0);
}

#[test]
fn preview_sink_receives_frames_while_active() {
    let (mut service, _) = service_with(AccessBehavior::Grant);
    let sink = RecordingSink::default();
    service.set_preview_sink(Box::new(sink.clone()));

    assert!(!service.pump_preview());
    service.start().expect("start");
    assert!(service.pump_preview());

    let frames = sink.frames.lock().expect("sink lock").clone();
    // one frame on activation, one from the explicit pump
    assert_eq!(frames, vec![(6, 4), (6, 4)]);

    service.stop();
    assert!(!service.pump_preview());
}
