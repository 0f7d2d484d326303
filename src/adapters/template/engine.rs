use std::io::Write;

use minijinja::{AutoEscape, Environment, Error, Template, UndefinedBehavior};

use crate::domain::Vars;

use super::Helpers;

/// Build the environment templates are compiled in.
///
/// Printing or iterating an undefined value fails the render instead of
/// producing an empty string, while `if` tests on it are simply false.
/// Output is never escaped.
pub fn build_template_environment<'source>(helpers: &Helpers) -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    helpers.install(&mut env);
    env
}

/// Render `template` against `vars`, streaming into `out`.
pub fn render_to<W: Write>(template: &Template<'_, '_>, vars: &Vars, out: W) -> Result<(), Error> {
    template.render_to_write(vars, out).map(|_| ())
}
