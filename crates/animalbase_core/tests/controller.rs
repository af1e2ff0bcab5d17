use std::collections::VecDeque;

use animalbase_core::{
    AnimalRecord, AppState, AppViewModel, ConflictPrompt, Controller, Msg, PromptView, Renderer,
    SingleChoice, SortDirection, SortKey, TwoChoice,
};

#[derive(Default)]
struct RecordingRenderer {
    views: Vec<AppViewModel>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &AppViewModel) {
        self.views.push(view.clone());
    }
}

#[derive(Default)]
struct ScriptedPrompt {
    single: VecDeque<SingleChoice>,
    two: VecDeque<TwoChoice>,
    asked: Vec<String>,
}

impl ConflictPrompt for ScriptedPrompt {
    fn prompt_single(&mut self, incumbent: &str) -> SingleChoice {
        self.asked.push(format!("single:{incumbent}"));
        self.single.pop_front().unwrap_or(SingleChoice::Dismiss)
    }

    fn prompt_two(&mut self, first: &str, second: &str) -> TwoChoice {
        self.asked.push(format!("two:{first},{second}"));
        self.two.pop_front().unwrap_or(TwoChoice::Dismiss)
    }
}

fn controller(prompt: ScriptedPrompt) -> Controller<RecordingRenderer, ScriptedPrompt> {
    let mut controller = Controller::new(RecordingRenderer::default(), prompt);
    controller.dispatch(Msg::DataLoaded {
        records: vec![
            AnimalRecord::new("Leo", "brave", "lion", 3),
            AnimalRecord::new("Mia", "clever", "lion", 5),
            AnimalRecord::new("Rex", "grumpy", "wolf", 7),
            AnimalRecord::new("Tweety", "yellow", "bird", 1),
        ],
        rejected: 0,
    });
    controller
}

fn winners(controller: &Controller<RecordingRenderer, ScriptedPrompt>) -> Vec<String> {
    controller
        .state()
        .records()
        .iter()
        .filter(|r| r.is_winner)
        .map(|r| r.name.clone())
        .collect()
}

#[test]
fn load_renders_once() {
    let controller = controller(ScriptedPrompt::default());
    assert_eq!(controller.renderer().views.len(), 1);
    assert_eq!(controller.renderer().views[0].rows.len(), 4);
}

#[test]
fn single_conflict_prompts_and_replaces() {
    let mut controller = controller(ScriptedPrompt {
        single: VecDeque::from([SingleChoice::Replace]),
        ..ScriptedPrompt::default()
    });
    controller.dispatch(Msg::WinnerToggled("Leo".to_string()));
    controller.dispatch(Msg::WinnerToggled("Mia".to_string()));

    assert_eq!(controller.prompt().asked, vec!["single:Leo"]);
    assert_eq!(winners(&controller), vec!["Mia"]);
    assert!(controller.state().conflict().is_idle());

    // load, promote Leo, prompt opened, prompt resolved.
    let views = &controller.renderer().views;
    assert_eq!(views.len(), 4);
    assert_eq!(
        views[2].prompt,
        Some(PromptView::SingleConflict {
            incumbent: "Leo".to_string()
        })
    );
    assert_eq!(views[3].prompt, None);
}

#[test]
fn two_conflict_dismiss_keeps_incumbents() {
    let mut controller = controller(ScriptedPrompt::default());
    controller.dispatch(Msg::WinnerToggled("Leo".to_string()));
    controller.dispatch(Msg::WinnerToggled("Rex".to_string()));
    controller.dispatch(Msg::WinnerToggled("Tweety".to_string()));

    assert_eq!(controller.prompt().asked, vec!["two:Leo,Rex"]);
    assert_eq!(winners(&controller), vec!["Leo", "Rex"]);
}

#[test]
fn two_conflict_offers_collection_order_not_display_order() {
    let mut controller = controller(ScriptedPrompt {
        two: VecDeque::from([TwoChoice::ReplaceSecond]),
        ..ScriptedPrompt::default()
    });
    controller.dispatch(Msg::SortChanged {
        key: SortKey::Name,
        direction: SortDirection::Descending,
    });
    controller.dispatch(Msg::WinnerToggled("Rex".to_string()));
    controller.dispatch(Msg::WinnerToggled("Leo".to_string()));
    controller.dispatch(Msg::WinnerToggled("Tweety".to_string()));

    assert_eq!(controller.prompt().asked, vec!["two:Leo,Rex"]);
    assert_eq!(winners(&controller), vec!["Leo", "Tweety"]);
}

#[test]
fn unchanged_settings_do_not_render() {
    let mut controller = controller(ScriptedPrompt::default());
    controller.dispatch(Msg::FilterChanged("all".to_string()));
    controller.dispatch(Msg::SortChanged {
        key: SortKey::Name,
        direction: SortDirection::Ascending,
    });
    assert_eq!(controller.renderer().views.len(), 1);

    controller.render_now();
    assert_eq!(controller.renderer().views.len(), 2);
}

#[test]
fn starts_from_existing_state() {
    let state = AppState::with_records(vec![AnimalRecord::new("Leo", "brave", "lion", 3)]);
    let mut controller =
        Controller::with_state(state, RecordingRenderer::default(), ScriptedPrompt::default());
    controller.dispatch(Msg::StarToggled("Leo".to_string()));
    assert!(controller.state().record("Leo").unwrap().is_starred);
    assert_eq!(controller.renderer().views.len(), 1);
}
