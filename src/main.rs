use iced_sheets::app::{App, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        dark: args.contains("--dark"),
        config_path: args.opt_value_from_str("--config").unwrap(),
    };

    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .title("iced_sheets demo")
        .window_size((420.0, 720.0))
        .run()
}
