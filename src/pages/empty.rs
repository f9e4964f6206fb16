use yew::prelude::*;

#[function_component(Empty)]
pub fn empty() -> Html {
    let go_back = Callback::from(|_: MouseEvent| {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    });

    html! {
        <div class="flex min-h-screen items-center justify-center text-gray-500 p-4">
            <div class="text-center">
                <i class="fa-solid fa-box-open text-6xl mb-4 text-gray-400"></i>
                <h3 class="text-xl font-medium mb-2">{"暂无内容"}</h3>
                <p class="text-gray-400">{"该页面目前没有可用内容"}</p>
                <button
                    class="mt-4 px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white rounded-lg transition-colors"
                    onclick={go_back}
                >
                    {"返回上一页"}
                </button>
            </div>
        </div>
    }
}
