#[macro_export]
macro_rules! tree_mux {
    {$($pattern:expr => $handler:expr),+ ; _ => $not_found:expr} => {{
        let mut __mux = $crate::TreeMux::<$crate::BoxHandler>::default();
        $(__mux.route($pattern, $handler);)+
        __mux.set_not_found($not_found);
        __mux
    }};

    {$($pattern:expr => $handler:expr),+ $(,)?} => {{
        let mut __mux = $crate::TreeMux::<$crate::BoxHandler>::default();
        $(__mux.route($pattern, $handler);)+
        __mux
    }};
}
