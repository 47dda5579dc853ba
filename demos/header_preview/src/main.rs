use std::cell::Cell;
use std::rc::Rc;

use homescreen_core::{Callback, SceneNode};
use homescreen_home::*;
use homescreen_ui::{inspect, layout_and_paint};

fn print_scene(title: &str, nodes: &[SceneNode]) {
    println!("== {title}");
    for n in nodes {
        if let SceneNode::Text {
            rect, text, color, ..
        } = n
        {
            println!(
                "  {:>6.1},{:>6.1} {:?} #{:02X}{:02X}{:02X}",
                rect.x, rect.y, text, color.0, color.1, color.2
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => HomeConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => HomeConfig::default(),
    };

    let preview_view = preview_with(&config);
    let (scene, _, sems) = config.provide(|| layout_and_paint(&preview_view, (360, 640)))?;
    print_scene("preview", &scene.nodes);
    print!("{}", inspect::dump_semantics(&sems));

    let store = AppStore::new(config.initial_state(vec![
        Wallpaper::new("amethyst").text_color(0xFFFBFBFE),
        Wallpaper::new("cerulean"),
    ]));
    let clicks = Rc::new(Cell::new(0u32));
    let on_show_all: Callback = {
        let clicks = clicks.clone();
        Rc::new(move || clicks.set(clicks.get() + 1))
    };

    let mut host = SectionHeaderHost::new(config, RenderMode::Live(store.clone()), move |mode| {
        SectionHeader(
            mode,
            string_resource(StringRes::RecentlySavedTitle),
            string_resource(StringRes::RecentlySavedShowAllContentDescription),
            Some(on_show_all.clone()),
        )
    });
    host.start()?;
    if let Some(frame) = host.frame() {
        print_scene("live", &frame.scene.nodes);
    }
    print!("{}", host.semantics_dump());

    store.dispatch(AppAction::UpdateCurrentWallpaper("amethyst".into()));
    if let Some(frame) = host.frame() {
        print_scene("live, amethyst wallpaper", &frame.scene.nodes);
    }

    host.click_action();
    println!(
        "renders: {}, show all clicks: {}",
        host.render_count(),
        clicks.get()
    );
    Ok(())
}
