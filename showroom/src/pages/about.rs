use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page",
            h1 { "About" }
            p { class: "page-lead",
                "Alder Works is a six-person joinery. We have been making \
                 furniture in the same converted tannery since 1987."
            }
            p {
                "The firm started as a repair shop for the street's antique \
                 dealers. Gluing other people's chairs back together for a \
                 decade taught us what fails and what lasts, and the range we \
                 build today is the result: frames that come apart the way \
                 they went together, finishes that age instead of flaking."
            }
            p {
                "We buy whole logs from two estates within a day's drive, \
                 band-saw them ourselves, and air-dry the boards under the \
                 roof for at least two summers before they see a bench."
            }
            p {
                "Everything in the catalog is made here. When something sells \
                 out it is because the timber for it is still drying."
            }
        }
    }
}
