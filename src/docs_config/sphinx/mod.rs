use crate::common::{basic_configure_replace, python_inline_list, python_multiline_list, python_str_literal};

use super::DocsConfig;

pub const SPHINX_CONF_PY_TEMPLATE: &'static str =
"# Configuration file for the Sphinx documentation builder.
#
# Generated by docs-conf. Edit docs_config.yaml or the crate manifest instead of this file.
#
# For the full list of built-in configuration values, see the documentation:
# https://www.sphinx-doc.org/en/master/usage/configuration.html

# -- Project information -----------------------------------------------------
# https://www.sphinx-doc.org/en/master/usage/configuration.html#project-information

project = @PROJECT_NAME@
copyright = @COPYRIGHT@
author = @AUTHOR@

version = @VERSION@

# -- General configuration ---------------------------------------------------
# https://www.sphinx-doc.org/en/master/usage/configuration.html#general-configuration

extensions = @EXTENSIONS@

templates_path = @TEMPLATES_PATH@
exclude_patterns = @EXCLUDE_PATTERNS@

# -- Options for HTML output -------------------------------------------------
# https://www.sphinx-doc.org/en/master/usage/configuration.html#options-for-html-output

html_theme = @HTML_THEME@
html_static_path = @HTML_STATIC_PATH@
";

pub fn render_conf_py(docs_config: &DocsConfig) -> String {
  return basic_configure_replace(
    SPHINX_CONF_PY_TEMPLATE,
    vec![
      ("PROJECT_NAME", python_str_literal(&docs_config.project)),
      ("COPYRIGHT", python_str_literal(&docs_config.copyright)),
      ("AUTHOR", python_str_literal(&docs_config.author)),
      ("VERSION", python_str_literal(&docs_config.version)),
      ("EXTENSIONS", python_multiline_list(&docs_config.extensions)),
      ("TEMPLATES_PATH", python_inline_list(&docs_config.templates_path)),
      ("EXCLUDE_PATTERNS", python_inline_list(&docs_config.exclude_patterns)),
      ("HTML_THEME", python_str_literal(&docs_config.html_theme)),
      ("HTML_STATIC_PATH", python_inline_list(&docs_config.html_static_path))
    ]
  );
}
