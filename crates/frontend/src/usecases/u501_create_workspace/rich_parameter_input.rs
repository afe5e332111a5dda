use crate::shared::components::ui::{Badge, Checkbox, HelperText, Input, RadioGroup, Select, Textarea};
use crate::shared::components::Avatar;
use crate::shared::theme::use_theme;
use contracts::domain::a001_template::{ParameterFormType, ParameterType, TemplateVersionParameter};
use leptos::prelude::*;

const BOOL_OPTIONS: [(&str, &str); 2] = [("true", "True"), ("false", "False")];

/// Widget a parameter is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterWidget {
    Text,
    Multiline,
    Number,
    Radio,
    Dropdown,
    Checkbox,
    List,
}

impl ParameterWidget {
    pub fn for_parameter(parameter: &TemplateVersionParameter) -> Self {
        match (parameter.parameter_type, parameter.form_type) {
            (ParameterType::Bool, ParameterFormType::Checkbox) => Self::Checkbox,
            (ParameterType::Bool, _) => Self::Radio,
            (ParameterType::ListString, _) => Self::List,
            (_, ParameterFormType::Dropdown) if parameter.has_options() => Self::Dropdown,
            _ if parameter.has_options() => Self::Radio,
            (ParameterType::Number, _) => Self::Number,
            (_, ParameterFormType::Textarea) => Self::Multiline,
            _ => Self::Text,
        }
    }
}

/// One rich parameter: label with badges, description and the input widget.
#[component]
pub fn RichParameterInput(
    parameter: TemplateVersionParameter,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    on_blur: Callback<()>,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    autofilled: bool,
) -> impl IntoView {
    let theme = use_theme();
    let widget = ParameterWidget::for_parameter(&parameter);
    let field_id = format!("parameter-{}", parameter.normalized_name());
    let title = if parameter.required {
        format!("{} *", parameter.label())
    } else {
        parameter.label().to_string()
    };
    let description = parameter.description.clone();
    let icon_src = parameter.icon.clone();
    let error = MaybeProp::from(error);

    let header = view! {
        <div class="rich-parameter__header">
            {(!icon_src.is_empty()).then(|| {
                let src = icon_src.clone();
                view! {
                    <Avatar
                        src=icon_src.clone()
                        size="sm"
                        square=true
                        image_style=Signal::derive(move || theme.config().external_images.style_for(&src))
                    />
                }
            })}
            <label class="rich-parameter__label" for=field_id.clone()>{title}</label>
            {(!parameter.mutable).then(|| view! { <Badge variant="warning">"Immutable"</Badge> })}
            {parameter.ephemeral.then(|| view! { <Badge variant="preview">"Ephemeral"</Badge> })}
            {autofilled.then(|| view! { <Badge variant="notice">"Autofilled"</Badge> })}
        </div>
    };

    let field = match widget {
        ParameterWidget::Checkbox => view! {
            <Checkbox
                id=field_id.clone()
                label=parameter.label().to_string()
                checked=Signal::derive(move || value.get() == "true")
                on_change=Callback::new(move |checked: bool| {
                    on_change.run(checked.to_string());
                    on_blur.run(());
                })
                disabled=disabled
            />
            <HelperText error=error helper=description.clone() />
        }
        .into_any(),
        ParameterWidget::Radio => {
            let options: Vec<(String, String)> = if parameter.parameter_type == ParameterType::Bool {
                BOOL_OPTIONS
                    .iter()
                    .map(|(v, l)| (v.to_string(), l.to_string()))
                    .collect()
            } else {
                parameter.option_pairs()
            };
            view! {
                <RadioGroup
                    name=field_id.clone()
                    value=value
                    options=options
                    on_change=Callback::new(move |v: String| {
                        on_change.run(v);
                        on_blur.run(());
                    })
                    disabled=disabled
                    error=error
                    helper=description.clone()
                />
            }
            .into_any()
        }
        ParameterWidget::Dropdown => view! {
            <Select
                id=field_id.clone()
                value=value
                options=parameter.option_pairs()
                on_change=Callback::new(move |v: String| {
                    on_change.run(v);
                    on_blur.run(());
                })
                disabled=disabled
                error=error
                helper=description.clone()
            />
        }
        .into_any(),
        ParameterWidget::Multiline | ParameterWidget::List => {
            let helper = if widget == ParameterWidget::List && description.is_empty() {
                "A JSON array of strings, e.g. [\"a\", \"b\"]".to_string()
            } else {
                description.clone()
            };
            view! {
                <Textarea
                    id=field_id.clone()
                    value=value
                    on_input=on_change
                    on_blur=on_blur
                    rows=3
                    disabled=disabled
                    error=error
                    helper=helper
                />
            }
            .into_any()
        }
        ParameterWidget::Number | ParameterWidget::Text => view! {
            <Input
                id=field_id.clone()
                name=parameter.name.clone()
                value=value
                on_input=on_change
                on_blur=on_blur
                input_type=if widget == ParameterWidget::Number { "number" } else { "text" }
                placeholder=parameter.default_value.clone()
                disabled=disabled
                required=parameter.required
                error=error
                helper=description.clone()
            />
        }
        .into_any(),
    };

    view! {
        <div class="rich-parameter" data-testid=format!("parameter-field-{}", parameter.name)>
            {header}
            {field}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_template::ParameterOption;

    fn option(value: &str) -> ParameterOption {
        ParameterOption {
            name: value.to_uppercase(),
            description: String::new(),
            value: value.into(),
            icon: String::new(),
        }
    }

    #[test]
    fn test_widget_selection() {
        let text = TemplateVersionParameter::new("region");
        assert_eq!(ParameterWidget::for_parameter(&text), ParameterWidget::Text);

        let options = TemplateVersionParameter {
            options: vec![option("eu"), option("us")],
            ..TemplateVersionParameter::new("region")
        };
        assert_eq!(ParameterWidget::for_parameter(&options), ParameterWidget::Radio);

        let dropdown = TemplateVersionParameter {
            form_type: ParameterFormType::Dropdown,
            ..options.clone()
        };
        assert_eq!(ParameterWidget::for_parameter(&dropdown), ParameterWidget::Dropdown);

        let number = TemplateVersionParameter {
            parameter_type: ParameterType::Number,
            ..TemplateVersionParameter::new("cpu")
        };
        assert_eq!(ParameterWidget::for_parameter(&number), ParameterWidget::Number);

        let flag = TemplateVersionParameter {
            parameter_type: ParameterType::Bool,
            ..TemplateVersionParameter::new("gpu")
        };
        assert_eq!(ParameterWidget::for_parameter(&flag), ParameterWidget::Radio);
        let checkbox = TemplateVersionParameter {
            form_type: ParameterFormType::Checkbox,
            ..flag
        };
        assert_eq!(ParameterWidget::for_parameter(&checkbox), ParameterWidget::Checkbox);

        let list = TemplateVersionParameter {
            parameter_type: ParameterType::ListString,
            ..TemplateVersionParameter::new("tags")
        };
        assert_eq!(ParameterWidget::for_parameter(&list), ParameterWidget::List);

        let notes = TemplateVersionParameter {
            form_type: ParameterFormType::Textarea,
            ..TemplateVersionParameter::new("notes")
        };
        assert_eq!(ParameterWidget::for_parameter(&notes), ParameterWidget::Multiline);
    }
}
