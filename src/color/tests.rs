use super::*;

fn samples() -> impl Iterator<Item = f64> {
  (0..=1000).map(|i| i as f64 / 1000.0)
}

#[test] fn grayscale_endpoints() {
  assert_eq!(grayscale(0.0), BLACK);
  assert_eq!(grayscale(-3.5), BLACK);
  assert_eq!(grayscale(1.0), WHITE);
  // 0.5^8 * 255 = 0.996..
  assert_eq!(grayscale(0.5), Rgb([0, 0, 0]));
  // 0.9^8 * 255 = 109.75..
  assert_eq!(grayscale(0.9), Rgb([109, 109, 109]));
}

#[test] fn grayscale_monotonic() {
  samples()
    .map(grayscale)
    .collect::<Vec<_>>()
    .windows(2)
    .for_each(|w| {
      assert_eq!(w[1].0[0], w[1].0[1]);
      assert_eq!(w[1].0[1], w[1].0[2]);
      assert!(w[0].0.iter().zip(w[1].0.iter()).all(|(a, b)| a <= b), "{:?}", w);
    });
}

#[test] fn greenscale_channels() {
  assert_eq!(greenscale(0.0), Rgb([0, 127, 0]));
  assert_eq!(greenscale(-1.0), Rgb([0, 127, 0]));
  assert_eq!(greenscale(1.0), WHITE);
  assert_eq!(greenscale(7.0), WHITE);
  samples()
    .filter(|&v| v > 0.0 && v < 1.0)
    .map(greenscale)
    .for_each(|c| {
      assert_eq!((c.0[0], c.0[2]), (0, 0));
      assert!(c.0[1] >= 127, "{:?}", c);
    });
  // (0.5 + 0.5 * 0.9^8) * 255 = 182.37..
  assert_eq!(greenscale(0.9), Rgb([0, 182, 0]));
}

#[test] fn pure() {
  samples().chain([-1.0, 2.0]).for_each(|v| {
    Colorer::ALL.iter().for_each(|colorer| {
      assert_eq!(colorer.map(v), colorer.map(v));
    })
  });
}

#[test] fn dispatch() {
  samples().for_each(|v| {
    assert_eq!(Colorer::Grayscale.map(v), grayscale(v));
    assert_eq!(Colorer::Greenscale.map(v), greenscale(v));
  });
}

#[test] fn parse() -> anyhow::Result<()> {
  assert_eq!("grayscale".parse::<Colorer>()?, Colorer::Grayscale);
  assert_eq!("Grey".parse::<Colorer>()?, Colorer::Grayscale);
  assert_eq!("green".parse::<Colorer>()?, Colorer::Greenscale);
  assert!("magenta".parse::<Colorer>().is_err());
  Colorer::ALL.iter().try_for_each(|c| {
    assert_eq!(c.to_string().parse::<Colorer>()?, *c);
    Ok(())
  })
}

#[test] fn scale_truncates() {
  assert_eq!(scale(WHITE, 0.5), Rgb([127, 127, 127]));
  assert_eq!(scale(Rgb([10, 20, 30]), 0.99), Rgb([9, 19, 29]));
  assert_eq!(scale(WHITE, 2.0), WHITE);
}
