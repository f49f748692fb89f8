/// Static informational pages
///
/// Home, about, and resume have no data dependency at all. The certificate
/// list is a constant table rather than a database table; editing it means
/// editing this file, which is fine at this scale.

use crate::web::render;
use axum::response::Html;

/// One entry of the certificates page
struct Certificate {
    title: &'static str,
    issuer: &'static str,
    /// Public asset path under /static
    file: &'static str,
}

const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "CS50x Certificate",
        issuer: "Harvard / CS50",
        file: "/static/certificates/cs50.png",
    },
    Certificate {
        title: "Web Development Internship",
        issuer: "TechnoHacks Solutions",
        file: "/static/certificates/webdev.jpg",
    },
    Certificate {
        title: "Introduction to Agile Methodology",
        issuer: "Infosys Springboard",
        file: "/static/certificates/agile.png",
    },
];

/// GET /
pub async fn home() -> Html<String> {
    render::page(
        "Home",
        None,
        "<h1>NovaVerse</h1>\n<p>Welcome to my corner of the web. Have a look at my \
         <a href=\"/projects\">projects</a> or <a href=\"/contact\">get in touch</a>.</p>",
    )
}

/// GET /about
pub async fn about() -> Html<String> {
    render::page(
        "About",
        None,
        "<h1>About me</h1>\n<p>Developer, tinkerer, and lifelong learner. This site collects \
         the things I build and the certificates I pick up along the way.</p>",
    )
}

/// GET /resume
pub async fn resume() -> Html<String> {
    render::page(
        "Resume",
        None,
        "<h1>Resume</h1>\n<p><a href=\"/static/resume.pdf\">Download my resume (PDF)</a></p>",
    )
}

/// GET /certificates
pub async fn certificates() -> Html<String> {
    let mut body = String::from("<h1>Certificates</h1>\n<ul class=\"certificates\">\n");
    for cert in CERTIFICATES {
        body.push_str(&format!(
            "<li><img src=\"{file}\" alt=\"{title}\">\
             <h2>{title}</h2><p>{issuer}</p></li>\n",
            file = cert.file,
            title = render::escape(cert.title),
            issuer = render::escape(cert.issuer),
        ));
    }
    body.push_str("</ul>");

    render::page("Certificates", None, &body)
}
