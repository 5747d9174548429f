use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::plant_doctor::core::{init, transition, Effect, Event, State};
use crate::plant_doctor::render::Render;
use crate::plant_doctor::run_effect::RunEffect;
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub struct PlantDoctor {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    run_effect: RunEffect,
    render: Render,
}

impl PlantDoctor {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        run_effect: RunEffect,
        render: Render,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("plant_doctor"),
            run_effect,
            render,
        }
    }

    /// Blocks until the user quits and returns the final state.
    pub fn run(&self) -> Result<State, Box<dyn Error + Send + Sync>> {
        let _ = self.logger.info("Starting plant doctor");

        let transition_config = self.config.clone();
        let transition_logger = self.logger.clone();
        let render = self.render.clone();
        let render_logger = self.logger.clone();
        let run_effect = self.run_effect.clone();

        let state_machine = StateMachine::new(
            init(&self.config),
            move |state: State, event: Event| {
                let _ = transition_logger.info(&format!("Processing event: {:?}", event));
                let (new_state, effects) = transition(&transition_config, state, event);
                if !effects.is_empty() {
                    let _ = transition_logger.info(&format!(
                        "Effects: {}",
                        effects
                            .iter()
                            .map(|effect| effect.to_display_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ));
                }
                (new_state, effects)
            },
            move |state: &State| {
                if let Err(e) = render.render(state) {
                    let _ = render_logger.error(&format!("Render failed: {}", e));
                }
            },
            move |effect: Effect, event_sender: Sender<Event>| {
                run_effect.run_effect(effect, event_sender)
            },
            |state: &State| state.quit,
        );

        let state = state_machine.run()?;
        let _ = self.logger.info("Stopped");

        Ok(state)
    }
}
