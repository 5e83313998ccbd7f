//! Bilinear and trilinear interpolation over arbitrary value types.
//!
//! Both functions are built purely by composing a caller-supplied 1-D lerp
//! `L(a, b, t) -> T`. Nothing here needs `T` to support arithmetic, so the
//! same code interpolates scalars, colours, vectors or any other structure the
//! caller knows how to blend along a line.
//!
//! ## Axis Conventions
//!
//! ```text
//!   top_left ---- top_right        x runs left -> right
//!      |              |            y runs bottom -> top
//!   bot_left ---- bot_right        z runs front -> back
//! ```
//!
//! The final blend along y is always `L(bot, top, yt)`: `yt = 0` selects the
//! bottom edge and `yt = 1` the top edge. Existing callers depend on this
//! argument order.
//!
//! ## Call Counts
//!
//! [`bilerp`] invokes the lerp 3 times and [`trilerp`] 7 times. Any panic
//! raised inside the supplied lerp propagates unchanged.

/// Bilinear interpolation across a quad.
///
/// # Algorithm
/// ```text
/// top = L(top_left, top_right, xt)
/// bot = L(bot_left, bot_right, xt)
/// out = L(bot, top, yt)
/// ```
///
/// # Arguments
/// * `lerp` - 1-D interpolation for `T`; must extrapolate outside `[0, 1]`
///   for out-of-range factors to extrapolate here
/// * `xt` - Factor along x (left to right)
/// * `yt` - Factor along y (bottom to top)
/// * `top_left`, `top_right`, `bot_right`, `bot_left` - Corner values,
///   clockwise from the top-left
///
/// # Examples
/// ```
/// use mathhelper_core::math::lerp::lerp;
/// use mathhelper_core::math::multilinear::bilerp;
///
/// let v = bilerp(lerp::<f32>, 0.5, 0.5, 1.0, 2.0, 3.0, 4.0);
/// assert_eq!(v, 2.5);
///
/// // yt = 0 picks the bottom edge
/// let bottom = bilerp(lerp::<f32>, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0);
/// assert_eq!(bottom, 4.0);
/// ```
#[inline]
pub fn bilerp<T, S, L>(
    lerp: L,
    xt: S,
    yt: S,
    top_left: T,
    top_right: T,
    bot_right: T,
    bot_left: T,
) -> T
where
    S: Copy,
    L: Fn(T, T, S) -> T,
{
    let top = lerp(top_left, top_right, xt);
    let bot = lerp(bot_left, bot_right, xt);
    lerp(bot, top, yt)
}

/// Trilinear interpolation across a box.
///
/// Interpolates the top and bottom faces with [`bilerp`] over the x/z
/// plane, then blends the two results along y with `L(bot, top, yt)`.
///
/// # Algorithm
/// ```text
/// top = bilerp(L, xt, zt, back_top_left, back_top_right, front_top_right, front_top_left)
/// bot = bilerp(L, xt, zt, back_bot_left, back_bot_right, front_bot_right, front_bot_left)
/// out = L(bot, top, yt)
/// ```
///
/// Within each face the back edge takes the role of the quad's top edge,
/// so `zt = 0` selects the front and `zt = 1` the back.
///
/// # Arguments
/// * `lerp` - 1-D interpolation for `T`
/// * `xt` - Factor along x (left to right)
/// * `yt` - Factor along y (bottom to top)
/// * `zt` - Factor along z (front to back)
/// * The eight corners, bottom face first, each face ordered
///   back-right, front-right, back-left, front-left
///
/// # Examples
/// ```
/// use mathhelper_core::math::lerp::lerp;
/// use mathhelper_core::math::multilinear::trilerp;
///
/// let v = trilerp(
///     lerp::<f32>,
///     0.5, 0.5, 0.5,
///     1.0, 2.0, 3.0, 4.0,
///     1.0, 2.0, 3.0, 4.0,
/// );
/// assert_eq!(v, 2.5);
/// ```
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn trilerp<T, S, L>(
    lerp: L,
    xt: S,
    yt: S,
    zt: S,
    back_bot_right: T,
    front_bot_right: T,
    back_bot_left: T,
    front_bot_left: T,
    back_top_right: T,
    front_top_right: T,
    back_top_left: T,
    front_top_left: T,
) -> T
where
    S: Copy,
    L: Fn(T, T, S) -> T,
{
    let top = bilerp(
        &lerp,
        xt,
        zt,
        back_top_left,
        back_top_right,
        front_top_right,
        front_top_left,
    );
    let bot = bilerp(
        &lerp,
        xt,
        zt,
        back_bot_left,
        back_bot_right,
        front_bot_right,
        front_bot_left,
    );
    lerp(bot, top, yt)
}
