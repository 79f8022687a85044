use contracts::enums::view::View;
use contracts::navigation::NavigationIntent;
use leptos::prelude::*;
use thaw::*;

use crate::layout::header::Header;
use crate::layout::navigation_bridge::{use_navigate_with_intent, use_navigation_bridge};
use crate::shared::page_frame::PageFrame;
use crate::system::auth::use_auth;

/// Local form checks; the first failure is shown to the user.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Email is required");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

#[component]
pub fn SignInPage() -> impl IntoView {
    use_navigation_bridge().take_for(View::SignIn);

    let auth = use_auth();
    let go = use_navigate_with_intent();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let submit = {
        let go = go.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let email_value = email.get_untracked();
            match validate_sign_in(&email_value, &password.get_untracked()) {
                Ok(()) => {
                    set_error.set(None);
                    auth.sign_in(&email_value);
                    go(NavigationIntent::new(View::Home));
                }
                Err(msg) => set_error.set(Some(msg)),
            }
        }
    };

    view! {
        <PageFrame page_id="signin--auth" title="Sign In">
            <Header />
            <form class="auth-form" on:submit=submit>
                <h1 class="auth-form__title">"Sign In"</h1>
                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>{e}</MessageBarBody>
                    </MessageBar>
                })}
                <div class="form__group">
                    <label class="form__label">"Email"</label>
                    <Input value=email placeholder="you@example.com" />
                </div>
                <div class="form__group">
                    <label class="form__label">"Password"</label>
                    <Input value=password input_type=InputType::Password />
                </div>
                <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                    "Sign In"
                </Button>
                <p class="auth-form__switch">
                    "No account? "
                    <a href="#" on:click=move |e| {
                        e.prevent_default();
                        go(NavigationIntent::new(View::SignUp));
                    }>"Sign up"</a>
                </p>
            </form>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_requires_fields() {
        assert_eq!(validate_sign_in("", "secret"), Err("Email is required"));
        assert_eq!(validate_sign_in("user", "secret"), Err("Enter a valid email address"));
        assert_eq!(validate_sign_in("user@example.com", ""), Err("Password is required"));
        assert_eq!(validate_sign_in("user@example.com", "secret"), Ok(()));
    }
}
