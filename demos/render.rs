use dragon_render::{Config, Prefix, RenderSettings, Renderer};

fn main() -> Result<(), dragon_render::Error> {
    env_logger::init();

    let settings = RenderSettings::from_config(
        Config::builder()
            .with_file("demos/render.toml", true)
            .with_env("DRAGON", "__"),
    )?;

    let mut properties = Config::builder()
        .with_file("demos/notification.properties", true)
        .build()?;

    // Numbered recipients come out first so they don't leak into the template scope
    let recipients = properties.extract_indexed(&Prefix::new("email.welcome.to")?);

    let renderer = Renderer::builder().with_settings(settings).build()?;
    let rendered = renderer.render_configured(properties)?;

    for (_, recipient) in recipients.iter() {
        println!("To: {recipient}");
    }
    println!("{}", rendered.text);
    println!("Unused properties: {}", rendered.remaining.len());

    Ok(())
}
