mod state;
use state::State;

use ggez::{
    conf::{Conf, WindowMode, WindowSetup},
    event, ContextBuilder,
};

pub fn main() {
    let c = Conf::new();
    let (ref mut ctx, ref mut event_loop) = ContextBuilder::new("gravity_sandbox", "me")
        .conf(c)
        .window_setup(WindowSetup {
            title: "Gravity sandbox!".to_owned(),
            ..Default::default()
        })
        .window_mode(WindowMode {
            resizable: true,
            ..Default::default()
        })
        .build()
        .unwrap();

    // Optionally start from a scene: a prefab name, or a path to a .json5
    // scene file. No argument starts with empty space to draw in.
    let starters = {
        let args: Vec<String> = std::env::args().collect();
        if args.len() == 2 {
            let arg = &args[1];
            if arg.ends_with(".json5") {
                let contents = std::fs::read_to_string(arg).unwrap();
                presets::load(contents).unwrap()
            } else {
                match presets::prefabs::by_name(arg) {
                    Some(bodies) => bodies,
                    None => {
                        println!("No prefab scene named {}, starting empty", arg);
                        Vec::new()
                    }
                }
            }
        } else {
            Vec::new()
        }
    };

    let state = &mut State::new(ctx, starters);

    event::run(ctx, event_loop, state).unwrap();
}
