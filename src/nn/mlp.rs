//! Multilayer perceptron: ReLU after every layer but the last

use ndarray::{Array2, ArrayViewD, ArrayViewMutD, Axis};
use rand::Rng;

use super::linear::{Init, Linear, LinearGrad};

/// Activations recorded by a forward pass, consumed by the backward passes
#[derive(Debug, Clone)]
pub struct ForwardTrace {
    /// Input of every layer; `inputs[0]` is the network input
    inputs: Vec<Array2<f32>>,
    /// ReLU masks (1.0 where the pre-activation is positive), one per hidden layer
    masks: Vec<Array2<f32>>,
    /// Network output
    output: Array2<f32>,
}

impl ForwardTrace {
    pub fn output(&self) -> &Array2<f32> {
        &self.output
    }

    pub fn into_output(self) -> Array2<f32> {
        self.output
    }
}

/// Per-layer parameter gradients, in the order of [`Mlp::parameters_mut`]
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub layers: Vec<LinearGrad>,
}

impl Gradients {
    pub fn zeros_like(mlp: &Mlp) -> Self {
        Self { layers: mlp.layers.iter().map(LinearGrad::zeros_like).collect() }
    }

    /// `self += factor * other`
    pub fn add_scaled(&mut self, other: &Gradients, factor: f32) {
        for (mine, theirs) in self.layers.iter_mut().zip(&other.layers) {
            mine.weight.scaled_add(factor, &theirs.weight);
            mine.bias.scaled_add(factor, &theirs.bias);
        }
    }

    /// Flat views matching [`Mlp::parameters_mut`]
    pub fn views(&self) -> Vec<ArrayViewD<'_, f32>> {
        self.layers
            .iter()
            .flat_map(|g| [g.weight.view().into_dyn(), g.bias.view().into_dyn()])
            .collect()
    }
}

/// Stack of [`Linear`] layers owned under a name prefix
#[derive(Debug, Clone)]
pub struct Mlp {
    name: String,
    layers: Vec<Linear>,
}

impl Mlp {
    /// Build a network with layer widths `dims` (`dims[0]` is the input width)
    ///
    /// Hidden layers use He initialization, the output layer LeCun.
    pub fn new<R: Rng>(name: impl Into<String>, dims: &[usize], rng: &mut R) -> Self {
        let depth = dims.len().saturating_sub(1);
        let layers = dims
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                let init = if i + 1 < depth { Init::He } else { Init::Lecun };
                Linear::new(w[0], w[1], init, rng)
            })
            .collect();
        Self::from_layers(name, layers)
    }

    /// Build a network from explicit layers
    pub fn from_layers(name: impl Into<String>, layers: Vec<Linear>) -> Self {
        Self { name: name.into(), layers }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layers(&self) -> &[Linear] {
        &self.layers
    }

    pub fn num_parameters(&self) -> usize {
        self.layers.iter().map(Linear::num_parameters).sum()
    }

    /// Parameter names, `<name>.<layer>.W` and `<name>.<layer>.b`, 1-based
    pub fn parameter_names(&self) -> Vec<String> {
        (1..=self.layers.len())
            .flat_map(|i| [format!("{}.{i}.W", self.name), format!("{}.{i}.b", self.name)])
            .collect()
    }

    /// Parameter names paired with their shapes, in [`Mlp::parameters_mut`] order
    pub fn parameter_shapes(&self) -> Vec<(String, Vec<usize>)> {
        let shapes = self.layers.iter().flat_map(|layer| [layer.weight.shape().to_vec(), layer.bias.shape().to_vec()]);
        self.parameter_names().into_iter().zip(shapes).collect()
    }

    /// Mutable views of every parameter: weight then bias, layer by layer
    pub fn parameters_mut(&mut self) -> Vec<ArrayViewMutD<'_, f32>> {
        self.layers
            .iter_mut()
            .flat_map(|layer| {
                let Linear { weight, bias } = layer;
                [weight.view_mut().into_dyn(), bias.view_mut().into_dyn()]
            })
            .collect()
    }

    pub fn forward(&self, x: &Array2<f32>) -> Array2<f32> {
        self.forward_trace(x).into_output()
    }

    pub fn forward_trace(&self, x: &Array2<f32>) -> ForwardTrace {
        let last = self.layers.len().saturating_sub(1);
        let mut inputs = Vec::with_capacity(self.layers.len());
        let mut masks = Vec::with_capacity(last);
        let mut h = x.clone();

        for (i, layer) in self.layers.iter().enumerate() {
            let z = layer.forward(&h);
            inputs.push(h);
            h = if i < last {
                masks.push(z.mapv(|v| if v > 0.0 { 1.0 } else { 0.0 }));
                z.mapv(|v| v.max(0.0))
            } else {
                z
            };
        }

        ForwardTrace { inputs, masks, output: h }
    }

    /// Cotangents of the pre-activations of every layer, plus the input gradient
    fn backward_deltas(
        &self,
        trace: &ForwardTrace,
        grad_output: &Array2<f32>,
    ) -> (Vec<Array2<f32>>, Array2<f32>) {
        let mut deltas = vec![Array2::zeros((0, 0)); self.layers.len()];
        let mut delta = grad_output.clone();

        for (i, layer) in self.layers.iter().enumerate().rev() {
            let upstream = delta.dot(&layer.weight.t());
            deltas[i] = delta;
            delta = if i > 0 { upstream * &trace.masks[i - 1] } else { upstream };
        }

        (deltas, delta)
    }

    /// Backpropagate an output cotangent
    ///
    /// Returns the parameter gradients and the gradient with respect to the
    /// network input.
    pub fn backward(
        &self,
        trace: &ForwardTrace,
        grad_output: &Array2<f32>,
    ) -> (Gradients, Array2<f32>) {
        let (deltas, input_grad) = self.backward_deltas(trace, grad_output);
        let layers = trace
            .inputs
            .iter()
            .zip(&deltas)
            .map(|(input, delta)| LinearGrad {
                weight: input.t().dot(delta),
                bias: delta.sum_axis(Axis(0)),
            })
            .collect();
        (Gradients { layers }, input_grad)
    }

    /// Row-wise gradient of the summed outputs with respect to the inputs
    ///
    /// For a single-output network row `n` is `∇ₓ f(x_n)`.
    pub fn input_gradient(&self, x: &Array2<f32>) -> Array2<f32> {
        let trace = self.forward_trace(x);
        let ones = Array2::ones(trace.output.raw_dim());
        self.backward_deltas(&trace, &ones).1
    }

    /// Parameter gradients of `Σₙ ⟨adjoint_n, ∇ₓ f(x_n)⟩`
    ///
    /// Differentiates the input gradient itself. ReLU masks are piecewise
    /// constant, so only the weights along the backward chain contribute and
    /// bias gradients are zero.
    pub fn input_gradient_backward(&self, x: &Array2<f32>, adjoint: &Array2<f32>) -> Gradients {
        let trace = self.forward_trace(x);
        let ones = Array2::ones(trace.output.raw_dim());
        let (deltas, _) = self.backward_deltas(&trace, &ones);

        let last = self.layers.len().saturating_sub(1);
        let mut reverse = adjoint.clone();
        let mut layers = Vec::with_capacity(self.layers.len());

        for (i, (layer, delta)) in self.layers.iter().zip(&deltas).enumerate() {
            layers.push(LinearGrad {
                weight: reverse.t().dot(delta),
                bias: ndarray::Array1::zeros(layer.bias.len()),
            });
            if i < last {
                reverse = reverse.dot(&layer.weight) * &trace.masks[i];
            }
        }

        Gradients { layers }
    }
}
