use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="ff">
            <div class="ff-label">
                { &props.label }{" "}
                { if props.required { html! { <span class="ff-req">{"*"}</span> } } else { html! {} } }
            </div>
            { for props.children.iter() }
        </div>
    }
}
