#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::Rect;
    use crate::Vec2;
    use crate::locals::*;
    use crate::signal::*;
    use crate::{Frame, HitRegion, Modifier, Role, SemNode, TextDirection};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let called = Rc::new(RefCell::new(false));

        let called_clone = called.clone();
        sig.subscribe(move |_| {
            *called_clone.borrow_mut() = true;
        });

        sig.set(42);
        assert!(*called.borrow());
    }

    #[test]
    fn test_subscriber_can_read_signal() {
        let sig = signal(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let sig2 = sig.clone();
            let seen = seen.clone();
            sig.subscribe(move |v| seen.borrow_mut().push((*v, sig2.get())));
        }
        sig.set(7);
        assert_eq!(*seen.borrow(), vec![(7, 7)]);
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let hits = Rc::new(RefCell::new(0));
        let id = {
            let hits = hits.clone();
            sig.subscribe(move |_| *hits.borrow_mut() += 1)
        };
        sig.set(1);
        assert!(sig.unsubscribe(id));
        assert!(!sig.unsubscribe(id));
        sig.set(2);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(sig.subscriber_count(), 0);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#12"), Color::BLACK);
    }

    #[test]
    fn test_color_from_argb() {
        assert_eq!(Color::from_argb(0xFF8000D7), Color(0x80, 0x00, 0xD7, 0xFF));
        assert_eq!(Color::from_argb(0x00FFFFFF), Color::WHITE.with_alpha(0));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
        assert_eq!(rect.center(), Vec2 { x: 60.0, y: 35.0 });
    }

    #[test]
    fn test_theme_locals_nest_and_restore() {
        assert_eq!(theme(), Theme::light());
        with_theme(Theme::dark(), || {
            assert_eq!(theme().text_primary, Theme::dark().text_primary);
            with_theme(Theme::private(), || {
                assert_eq!(theme().layer1, Theme::private().layer1);
            });
            assert_eq!(theme().layer1, Theme::dark().layer1);
        });
        assert_eq!(theme(), Theme::light());
    }

    #[test]
    fn test_locals_pop_on_unwind() {
        let r = std::panic::catch_unwind(|| {
            with_density(Density { scale: 3.0 }, || panic!("boom"));
        });
        assert!(r.is_err());
        assert_eq!(density().scale, 1.0);
    }

    #[test]
    fn test_sp_applies_density_and_text_scale() {
        with_density(Density { scale: 2.0 }, || {
            with_text_scale(TextScale(1.5), || {
                assert_eq!(dp_to_px(10.0), 20.0);
                assert_eq!(sp_to_px(10.0), 30.0);
            })
        });
    }

    #[test]
    fn test_generic_local() {
        #[derive(Clone, Default, PartialEq, Debug)]
        struct Locale(String);

        assert_eq!(try_local::<Locale>(), None);
        with_local(Locale("de".into()), || {
            assert_eq!(local::<Locale>(), Locale("de".into()));
        });
        assert_eq!(local::<Locale>(), Locale::default());
    }

    #[test]
    fn test_padding_start_follows_direction() {
        let m = Modifier::new().padding(2.0).padding_start(16.0);
        let ltr = m.resolved_padding(TextDirection::Ltr);
        let rtl = m.resolved_padding(TextDirection::Rtl);
        assert_eq!((ltr.left, ltr.right), (16.0, 2.0));
        assert_eq!((rtl.left, rtl.right), (2.0, 16.0));
    }

    #[test]
    fn test_frame_click_hits_topmost() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let region = |id: u64| {
            let log = log.clone();
            HitRegion {
                id,
                rect: Rect {
                    x: 0.0,
                    y: 0.0,
                    w: 10.0,
                    h: 10.0,
                },
                on_click: Some(Rc::new(move || log.borrow_mut().push(id))),
            }
        };
        let frame = Frame {
            // Later regions paint over earlier ones.
            hit_regions: vec![region(1), region(2)],
            semantics_nodes: vec![SemNode {
                id: 2,
                role: Role::Button,
                label: Some("go".into()),
                rect: Rect::default(),
                focused: false,
                enabled: true,
            }],
            ..Default::default()
        };
        assert!(frame.click_at(Vec2 { x: 5.0, y: 5.0 }));
        assert!(!frame.click_at(Vec2 { x: 50.0, y: 5.0 }));
        assert_eq!(*log.borrow(), vec![2]);
        assert_eq!(frame.semantics_with_role(Role::Button).count(), 1);
    }
}
