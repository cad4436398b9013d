use showroom::App;

fn main() {
    dioxus::launch(App);
}
