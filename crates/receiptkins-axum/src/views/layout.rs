use maud::{DOCTYPE, Markup, html};

/// Page shell shared by every full page.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · Receiptkins" }
                link rel="stylesheet" href="/static/style.css";
                script src="/static/app.js" defer {}
            }
            body {
                header.site-header {
                    a.brand href="/" { "Receiptkins" }
                    nav {
                        a href="/create" { "New recipe" }
                    }
                }
                main {
                    (content)
                }
            }
        }
    }
}
