use color_eyre::eyre::Context;
use handlebars::{Handlebars, Helper, HelperDef, RenderContext, RenderError};

struct SignoffVersion;

impl HelperDef for SignoffVersion {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        _: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc handlebars::Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<handlebars::ScopedJson<'reg, 'rc>, RenderError> {
        Ok(handlebars::ScopedJson::from(serde_json::Value::String(
            env!("CARGO_PKG_VERSION").to_string(),
        )))
    }
}

pub fn create_handlebars() -> color_eyre::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.set_dev_mode(true);

    handlebars.register_helper("signoff_version", Box::new(SignoffVersion));

    for template in std::fs::read_dir("dist")? {
        let template = template?;

        if template.path().extension() != Some("html".as_ref()) {
            continue;
        }

        handlebars
            .register_template_file(
                &template
                    .path()
                    .file_stem()
                    .expect("no file stem")
                    .to_string_lossy(),
                template.path(),
            )
            .context("failed to register template")?;
    }

    Ok(handlebars)
}
