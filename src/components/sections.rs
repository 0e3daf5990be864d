use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::content::{Portfolio, Tagline};

/// Props for the static sections. The page hands every section the same `Rc`,
/// so re-renders driven by scroll or pointer state compare equal and are skipped.
#[derive(Properties, PartialEq)]
pub struct ContentProps {
    pub content: Rc<Portfolio>,
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub owner: AttrValue,
    pub photo: AttrValue,
    pub tagline: Tagline,
    pub style: AttrValue,
    pub on_explore: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let onclick = {
        let on_explore = props.on_explore.clone();
        Callback::from(move |_: MouseEvent| on_explore.emit(()))
    };

    html! {
        <div class="hero" style={props.style.clone()}>
            <div class="container hero-content">
                <div class="profile-photo-container animate-fadeInUp">
                    <img
                        src={props.photo.clone()}
                        alt={props.owner.clone()}
                        class="profile-photo"
                    />
                </div>
                <h1 class="hero-title">
                    <span class="animate-fadeInUp">{props.owner.clone()}</span>
                </h1>
                <p class="hero-tagline animate-fadeInUp animation-delay-200">
                    {&props.tagline.role}
                    <span class="divider">{" | "}</span>
                    {&props.tagline.employer}
                </p>
                <div class="animate-fadeInUp animation-delay-400">
                    <button {onclick} class="cta-button">
                        <span class="cta-button-bg"></span>
                        <span class="cta-button-text">{"Explore My Work ↗"}</span>
                    </button>
                </div>
            </div>

            <div class="decorative-circle circle-1"></div>
            <div class="decorative-circle circle-2"></div>
        </div>
    }
}

#[function_component(About)]
pub fn about(props: &ContentProps) -> Html {
    html! {
        <section id="about" class="section">
            <div class="container">
                <div class="section-content">
                    <h2 class="section-title">
                        {"About Me"}
                        <div class="title-underline"></div>
                    </h2>
                    { for props.content.about.iter().enumerate().map(|(i, text)| html! {
                        <p class={classes!("section-text", (i > 0).then(|| "mb-12"))}>{text}</p>
                    }) }

                    <div class="skills-grid">
                        { for props.content.skills.iter().map(|skill| html! {
                            <div key={skill.clone()} class="skill-card">
                                <span class="skill-name">{skill}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <div class="decorative-circle circle-3"></div>
        </section>
    }
}

#[function_component(Projects)]
pub fn projects(props: &ContentProps) -> Html {
    html! {
        <section id="projects" class="section projects-section">
            <div class="container">
                <h2 class="section-title">
                    {"Projects"}
                    <div class="title-underline"></div>
                </h2>

                <div class="projects-grid">
                    { for props.content.projects.iter().map(|project| html! {
                        <div key={project.id} class="project-card">
                            <div class="project-content">
                                <h3 class="project-title">{&project.title}</h3>
                                <p class="project-description">{&project.description}</p>
                                <div class="project-tags">
                                    { for project.tags.iter().map(|tag| html! {
                                        <span key={tag.clone()} class="project-tag">{tag}</span>
                                    }) }
                                </div>
                                <button class="project-link">{"View Project ↗"}</button>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <div class="decorative-circle circle-4"></div>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContentProps) -> Html {
    let contact = &props.content.contact;
    html! {
        <section id="contact" class="section">
            <div class="container">
                <div class="section-content">
                    <h2 class="section-title">
                        {"Contact"}
                        <div class="title-underline"></div>
                    </h2>

                    <div class="contact-grid">
                        <div class="contact-card">
                            <div class="contact-card-header">
                                <span class="contact-icon">{"✉"}</span>
                                <h3 class="contact-card-title">{"Email"}</h3>
                            </div>
                            <a href={contact.mailto()} class="contact-link">{&contact.email}</a>
                        </div>

                        <div class="contact-card">
                            <div class="contact-card-header">
                                <span class="contact-icon">{"☎"}</span>
                                <h3 class="contact-card-title">{"Phone"}</h3>
                            </div>
                            <a href={contact.tel()} class="contact-link">
                                {&contact.phone.display}
                            </a>
                        </div>
                    </div>

                    <div class="social-links">
                        { for props.content.socials.iter().map(|social| html! {
                            <a
                                href={social.url.clone()}
                                target="_blank"
                                rel="noreferrer"
                                class="social-link"
                            >
                                {social.kind.label()}
                            </a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="decorative-circle circle-5"></div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer(props: &ContentProps) -> Html {
    let notice = format!(
        "© {} {}. All rights reserved.",
        chrono::Local::now().year(),
        props.content.owner
    );
    html! {
        <footer class="footer">
            <div class="container">
                <p class="footer-text">{notice}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_content_props_compare_equal() {
        let content = Rc::new(Portfolio::bundled().unwrap());
        let before = ContentProps { content: Rc::clone(&content) };
        let after = ContentProps { content };
        assert!(before == after);
    }

    #[test]
    fn changed_content_props_differ() {
        let content = Portfolio::bundled().unwrap();
        let mut edited = content.clone();
        edited.skills.push("Rust".to_string());
        let before = ContentProps { content: Rc::new(content) };
        let after = ContentProps { content: Rc::new(edited) };
        assert!(before != after);
    }
}
