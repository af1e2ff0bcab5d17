use std::collections::VecDeque;

use animal_logging::animal_trace;

use crate::{update, AppState, AppViewModel, Effect, Msg, SingleChoice, TwoChoice};

/// Presentation side of the table: receives a fresh view after every change.
pub trait Renderer {
    fn render(&mut self, view: &AppViewModel);
}

/// Asks the user how to settle a winner conflict.
pub trait ConflictPrompt {
    fn prompt_single(&mut self, incumbent: &str) -> SingleChoice;
    fn prompt_two(&mut self, first: &str, second: &str) -> TwoChoice;
}

/// Owns the state and drives [`update`] against the adapter's callbacks.
///
/// A prompt effect is answered before `dispatch` returns, so the next intent
/// always sees an idle conflict flow.
pub struct Controller<R, P> {
    state: AppState,
    renderer: R,
    prompt: P,
}

impl<R: Renderer, P: ConflictPrompt> Controller<R, P> {
    pub fn new(renderer: R, prompt: P) -> Self {
        Self::with_state(AppState::new(), renderer, prompt)
    }

    pub fn with_state(state: AppState, renderer: R, prompt: P) -> Self {
        Self {
            state,
            renderer,
            prompt,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Renders the current view unconditionally.
    pub fn render_now(&mut self) {
        let view = self.state.view();
        self.state.consume_dirty();
        self.renderer.render(&view);
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            animal_trace!("dispatch {:?}", msg);
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;

            if self.state.consume_dirty() {
                let view = self.state.view();
                self.renderer.render(&view);
            }

            for effect in effects {
                inbox.push_back(self.run_effect(effect));
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) -> Msg {
        match effect {
            Effect::PromptSingleConflict { incumbent } => {
                Msg::SingleConflictResolved(self.prompt.prompt_single(&incumbent))
            }
            Effect::PromptTwoConflict { first, second } => {
                Msg::TwoConflictResolved(self.prompt.prompt_two(&first, &second))
            }
        }
    }
}
