//! Product catalog.
//!
//! The catalog ships compiled into the app; pages look entries up by id.

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
}

pub const PRODUCTS: [Product; 4] = [
    Product {
        id: 1,
        name: "Linden Chair",
        tagline: "Steam-bent oak, woven seat",
        description: "A dining chair built around a single steam-bent oak \
                      hoop. The seat is hand-woven paper cord, tensioned to \
                      settle in rather than sag, and every joint is pegged — \
                      no fasteners, no glue lines on show.",
    },
    Product {
        id: 2,
        name: "Fjord Table",
        tagline: "Solid ash, six to ten seats",
        description: "Our workhorse dining table. Book-matched ash planks on \
                      a trestle base that knocks down for moving, finished \
                      with hardwax oil so scratches mend with a cloth rather \
                      than a refinisher.",
    },
    Product {
        id: 3,
        name: "Cargo Shelf",
        tagline: "Modular shelving that grows sideways",
        description: "A shelving system cut from the offcuts of our table \
                      production. Uprights bolt together in any width, and \
                      shelves drop onto machined steel pins, so a two-bay \
                      unit can become a wall over the years.",
    },
    Product {
        id: 4,
        name: "Slate Bench",
        tagline: "Entryway bench with hidden storage",
        description: "A low bench with a lift-lid seat over a felt-lined \
                      compartment. The frame is fumed oak; the lid closes on \
                      soft dampers and holds a person on its edge without \
                      complaint.",
    },
];

pub fn all() -> &'static [Product] {
    &PRODUCTS
}

pub fn find(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}
