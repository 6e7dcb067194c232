#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::f64::consts::PI;
    use std::rc::Rc;

    use crate::core::scheduler::{
        Debouncer, FrameLoop, ManualFrameClock, ManualTimer, schedule_relayout,
    };
    use crate::core::{
        CarouselConfig, CarouselController, CarouselInput, RecordingSurface, RenderMode,
        base_angle, compute_radius,
    };

    fn laid_out(cards: usize, width: f64) -> CarouselController<RecordingSurface> {
        let mut controller =
            CarouselController::new(CarouselConfig::default(), RecordingSurface::new(cards, width));
        controller.layout().unwrap();
        controller
    }

    #[test]
    fn test_eight_cards_use_minimum_radius() {
        let raw = 8.0 * 220.0 / (2.0 * PI);
        assert!((raw - 280.1).abs() < 0.1);
        assert_eq!(compute_radius(8, 200.0, 20.0, 300.0).unwrap(), 300.0);
    }

    #[test]
    fn test_every_base_angle_is_exact() {
        for count in 1..=24 {
            let controller = laid_out(count, 200.0);
            for index in 0..count {
                let expected = index as f64 / count as f64 * 360.0;
                assert_eq!(base_angle(index, count), expected);
                let transform = controller.surface().card_transforms[index].clone().unwrap();
                assert!(transform.contains(&format!("rotateY({expected}deg)")));
            }
        }
    }

    #[test]
    fn test_first_move_delta_is_relative_to_start() {
        let mut controller = laid_out(8, 200.0);
        controller.handle(CarouselInput::PointerDown(500.0));
        assert!(controller.state().is_dragging);
        assert!(controller.state().is_paused);

        let before = controller.state().angle;
        controller.handle(CarouselInput::PointerMove(460.0));
        let start_x = controller.state().start_x;
        assert_eq!(controller.state().angle - before, (460.0 - start_x) * 0.5);
        assert_eq!(controller.state().angle - before, -20.0);
    }

    #[test]
    fn test_k_idle_frames_rotate_k_steps() {
        let controller = Rc::new(RefCell::new(laid_out(8, 200.0)));
        let clock = ManualFrameClock::new();
        let _frame_loop = FrameLoop::start(controller.clone(), clock.clone());

        clock.advance(240);
        assert_eq!(clock.frames(), 240);
        let state = controller.borrow().state().clone();
        assert!((state.angle - 240.0 * 0.5).abs() < 1e-9);
        assert!((state.display_angle() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_auto_rotate_keeps_growing_past_full_turn() {
        let mut controller = laid_out(8, 200.0);
        for _ in 0..1000 {
            controller.frame();
        }
        assert!((controller.state().angle - 500.0).abs() < 1e-9);
        assert!((controller.state().display_angle() - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_release_while_hovered_coasts_then_holds() {
        let controller = Rc::new(RefCell::new(laid_out(8, 200.0)));
        let clock = ManualFrameClock::new();
        let _frame_loop = FrameLoop::start(controller.clone(), clock.clone());

        {
            let mut c = controller.borrow_mut();
            c.handle(CarouselInput::HoverEnter);
            c.handle(CarouselInput::PointerDown(400.0));
            c.handle(CarouselInput::PointerMove(440.0));
            c.handle(CarouselInput::PointerUp);
        }
        assert_eq!(controller.borrow().state().velocity, 20.0);

        let mut previous_velocity = 20.0;
        let mut coasting_frames = 0;
        loop {
            let mode = controller.borrow().state().mode(0.01);
            if mode != RenderMode::Coasting {
                break;
            }
            clock.tick();
            let velocity = controller.borrow().state().velocity;
            assert!((velocity - previous_velocity * 0.95).abs() < 1e-12);
            previous_velocity = velocity;
            coasting_frames += 1;
            assert!(coasting_frames < 1000, "inertia never settled");
        }

        // 20 * 0.95^n <= 0.01  =>  n = ceil(ln(0.0005) / ln(0.95))
        let expected = ((0.01_f64 / 20.0).ln() / 0.95_f64.ln()).ceil() as i32;
        assert_eq!(coasting_frames, expected);

        let settled = controller.borrow().state().angle;
        clock.advance(50);
        assert_eq!(controller.borrow().state().angle, settled);
        assert_eq!(controller.borrow().state().mode(0.01), RenderMode::Held);
    }

    #[test]
    fn test_coasting_total_is_geometric_sum() {
        let mut controller = laid_out(8, 200.0);
        controller.hover_enter();
        controller.pointer_down(0.0);
        controller.pointer_move(20.0);
        controller.pointer_up();
        let start = controller.state().angle;

        let mut expected = 0.0;
        let mut v = 10.0;
        while v > 0.01 {
            expected += v;
            v *= 0.95;
        }
        for _ in 0..500 {
            controller.frame();
        }
        assert!((controller.state().angle - start - expected).abs() < 1e-9);
    }

    #[test]
    fn test_release_outside_resumes_auto_rotation() {
        let mut controller = laid_out(8, 200.0);
        controller.pointer_down(0.0);
        controller.pointer_move(30.0);
        controller.pointer_up();

        let angle = controller.state().angle;
        assert_eq!(controller.frame(), RenderMode::AutoRotate);
        assert_eq!(controller.state().angle, angle + 0.5);
    }

    #[test]
    fn test_debounced_resize_relayouts_once() {
        let controller = Rc::new(RefCell::new(laid_out(16, 200.0)));
        let layouts = Rc::new(RefCell::new(Vec::new()));
        let timer = ManualTimer::new();
        let debouncer = Debouncer::new(timer.clone(), 250);

        for width in [220.0, 260.0, 320.0] {
            controller.borrow_mut().surface_mut().card_width = width;
            let controller = controller.clone();
            let layouts = layouts.clone();
            debouncer.trigger(move || {
                let radius = controller.borrow_mut().layout();
                layouts.borrow_mut().push(radius);
            });
            timer.advance(50);
        }
        assert!(layouts.borrow().is_empty());

        timer.advance(250);
        let layouts = layouts.borrow();
        assert_eq!(layouts.len(), 1);

        let expected = 16.0 * 340.0 / (2.0 * PI);
        let radius = layouts[0].clone().unwrap();
        assert!((radius - expected).abs() < 1e-9);
        assert_eq!(controller.borrow().state().radius, radius);
    }

    #[test]
    fn test_frames_render_container_transform() {
        let controller = Rc::new(RefCell::new(laid_out(8, 200.0)));
        let clock = ManualFrameClock::new();
        let _frame_loop = FrameLoop::start(controller.clone(), clock.clone());

        clock.advance(2);
        assert_eq!(
            controller.borrow().surface().container_transform.as_deref(),
            Some("translateZ(-300px) rotateY(1deg)")
        );
    }

    #[test]
    fn test_hover_after_release_coasts_on_stale_velocity() {
        let mut controller = laid_out(8, 200.0);
        controller.pointer_down(0.0);
        controller.pointer_move(40.0);
        controller.pointer_up();
        assert!(!controller.state().is_paused);
        assert_eq!(controller.state().velocity, 20.0);

        for _ in 0..100 {
            assert_eq!(controller.frame(), RenderMode::AutoRotate);
        }
        // Auto-rotation leaves the last flick velocity in place
        assert_eq!(controller.state().velocity, 20.0);

        controller.hover_enter();
        let before = controller.state().angle;
        assert_eq!(controller.frame(), RenderMode::Coasting);
        assert_eq!(controller.state().angle - before, 20.0);
        assert_eq!(controller.state().velocity, 20.0 * 0.95);

        let before = controller.state().angle;
        assert_eq!(controller.frame(), RenderMode::Coasting);
        assert!((controller.state().angle - before - 19.0).abs() < 1e-12);
    }

    #[test]
    fn test_relayout_runs_while_frame_loop_is_live() {
        let controller = Rc::new(RefCell::new(laid_out(16, 200.0)));
        let clock = ManualFrameClock::new();
        let frame_loop = FrameLoop::start(controller.clone(), clock.clone());
        let timer = ManualTimer::new();
        let debouncer = Debouncer::new(timer.clone(), 250);

        controller.borrow_mut().surface_mut().card_width = 400.0;
        schedule_relayout(&debouncer, &controller, &frame_loop);
        timer.advance(250);

        let expected = 16.0 * 420.0 / (2.0 * PI);
        assert!((controller.borrow().state().radius - expected).abs() < 1e-9);
        assert_eq!(controller.borrow().surface().card_refreshes, 2);
    }

    #[test]
    fn test_relayout_skipped_after_frame_loop_stops() {
        let controller = Rc::new(RefCell::new(laid_out(16, 200.0)));
        let clock = ManualFrameClock::new();
        let frame_loop = FrameLoop::start(controller.clone(), clock.clone());
        let timer = ManualTimer::new();
        let debouncer = Debouncer::new(timer.clone(), 250);

        controller.borrow_mut().surface_mut().card_width = 400.0;
        schedule_relayout(&debouncer, &controller, &frame_loop);
        frame_loop.stop();
        timer.advance(250);

        let initial = 16.0 * 220.0 / (2.0 * PI);
        assert!((controller.borrow().state().radius - initial).abs() < 1e-9);
        assert_eq!(controller.borrow().surface().card_refreshes, 1);

        // A resize arriving after teardown is dropped as well
        schedule_relayout(&debouncer, &controller, &frame_loop);
        debouncer.cancel();
        timer.advance(500);
        assert_eq!(controller.borrow().surface().card_refreshes, 1);
    }
}
