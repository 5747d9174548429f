#[cfg(test)]
mod main_test {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use crate::device_display::interface::{ModelStatus, Screen};
    use crate::device_input::interface::DeviceInputEvent;
    use crate::leaf_image::LeafImage;
    use crate::plant_doctor::core::{ModelState, PredictionState};
    use crate::plant_doctor::tests::fixture::{leaf_png, Fixture};

    /// Polls the recorded screens until the newest one satisfies `accept`.
    fn wait_for_screen(screens: &Arc<Mutex<Vec<Screen>>>, accept: impl Fn(&Screen) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if screens.lock().unwrap().last().is_some_and(&accept) {
                return;
            }
            assert!(Instant::now() < deadline, "timed out waiting for screen");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_quit_stops_run() {
        let fixture = Fixture::with_script(vec![DeviceInputEvent::QuitPressed]);

        let state = fixture.plant_doctor().run().unwrap();

        assert!(state.quit);
    }

    #[test]
    fn test_drop_and_diagnose_session() {
        let (fixture, input) = Fixture::remote();
        let plant_doctor = fixture.plant_doctor();
        let session = std::thread::spawn(move || plant_doctor.run());

        wait_for_screen(&fixture.screens, |screen| screen.status == ModelStatus::Online);
        input
            .send(DeviceInputEvent::ImageDropped(LeafImage::new(
                "leaf.png",
                leaf_png(),
            )))
            .unwrap();
        wait_for_screen(&fixture.screens, |screen| screen.can_diagnose);
        input.send(DeviceInputEvent::DiagnosePressed).unwrap();
        wait_for_screen(&fixture.screens, |screen| screen.result.is_some());
        input.send(DeviceInputEvent::QuitPressed).unwrap();

        let state = session.join().unwrap().unwrap();

        assert_eq!(state.model, ModelState::Ready);
        match &state.prediction {
            PredictionState::Resolved(prediction) => {
                assert_eq!(prediction.label, "Tomato___Late_blight");
            }
            other => panic!("Unexpected prediction state {:?}", other),
        }

        let screens = fixture.screens.lock().unwrap();
        assert_eq!(
            screens.first().map(|screen| screen.status.clone()),
            Some(ModelStatus::Initializing)
        );
        assert!(screens.iter().any(|screen| screen.busy));
        let last = screens.last().unwrap();
        let result = last.result.as_ref().unwrap();
        assert_eq!(result.title, "Tomato Late blight");
        assert_eq!(result.confidence_percent, "87.3");
        assert_eq!(last.status_line(), "System online");
    }
}
